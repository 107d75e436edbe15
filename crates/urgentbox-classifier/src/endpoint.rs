//! Classifier endpoint configuration.

use crate::error::{Error, Result};
use url::Url;

/// Path of the urgency route, relative to the service base URL.
pub const URGENCY_PATH: &str = "/urgency/get";

/// Location of a classifier service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base URL as configured (e.g. `http://localhost:8000`).
    pub base_url: Url,
    /// Fully resolved urgency route.
    pub urgency_url: Url,
}

impl Endpoint {
    /// Creates an endpoint from a base URL.
    ///
    /// The urgency route is appended to the base path, so a base of
    /// `http://host/api` resolves to `http://host/api/urgency/get`. A query
    /// string on the base is kept and a fragment is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or is not `http`/`https`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let raw = base_url.as_ref().trim();
        if raw.is_empty() {
            return Err(Error::InvalidConfig(
                "classifier base URL is empty".to_string(),
            ));
        }

        let base_url = Url::parse(raw)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "unsupported classifier URL scheme: {}",
                base_url.scheme()
            )));
        }

        let mut urgency_url = base_url.clone();
        urgency_url.set_fragment(None);
        urgency_url
            .path_segments_mut()
            .map_err(|()| Error::InvalidConfig(format!("classifier URL has no path: {base_url}")))?
            .pop_if_empty()
            .extend(URGENCY_PATH.trim_start_matches('/').split('/'));

        Ok(Self {
            base_url,
            urgency_url,
        })
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.urgency_url)
    }
}
