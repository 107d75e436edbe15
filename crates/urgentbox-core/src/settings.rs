//! Application settings.
//!
//! Settings live in `settings.json` under the platform config directory.
//! A missing file means defaults. Environment variables override the file:
//!
//! - `URGENTBOX_CLASSIFIER_URL` - classifier base URL
//! - `URGENTBOX_CLASSIFIER_TIMEOUT_SECS` - request timeout in seconds

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use urgentbox_classifier::{ClassifierClient, Endpoint};

use crate::{Error, Result};

/// Environment variable overriding the classifier base URL.
pub const ENV_CLASSIFIER_URL: &str = "URGENTBOX_CLASSIFIER_URL";
/// Environment variable overriding the classifier timeout.
pub const ENV_CLASSIFIER_TIMEOUT: &str = "URGENTBOX_CLASSIFIER_TIMEOUT_SECS";

/// Classifier connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// Base URL of the classifier service. `None` disables classification.
    pub base_url: Option<String>,
    /// Request timeout in seconds. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

/// Settings that persist across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Classifier connection.
    pub classifier: ClassifierSettings,
}

impl Settings {
    /// Default settings file location.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("urgentbox")
            .join("settings.json")
    }

    /// Load settings from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to a file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout variable is not a number.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout value is not a number.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = var(ENV_CLASSIFIER_URL) {
            self.classifier.base_url = Some(url);
        }

        if let Some(raw) = var(ENV_CLASSIFIER_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!(
                    "{ENV_CLASSIFIER_TIMEOUT} must be a number of seconds, got {raw:?}"
                ))
            })?;
            self.classifier.timeout_secs = Some(secs);
        }

        Ok(self)
    }

    /// Builds the classifier client, if a base URL is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn classifier_client(&self) -> Result<Option<ClassifierClient>> {
        let Some(base_url) = self.classifier.base_url.as_deref() else {
            return Ok(None);
        };

        let endpoint = Endpoint::new(base_url)?;
        let client = match self.classifier.timeout_secs {
            Some(secs) => ClassifierClient::with_timeout(endpoint, Duration::from_secs(secs))?,
            None => ClassifierClient::new(endpoint),
        };
        Ok(Some(client))
    }
}
