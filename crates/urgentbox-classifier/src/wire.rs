//! JSON payloads exchanged with the classifier service.

use serde::{Deserialize, Serialize};

/// Body of an urgency request.
///
/// The service names the body field `message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrgencyRequest<'a> {
    /// Message subject.
    pub subject: &'a str,
    /// Message body.
    pub message: &'a str,
}

/// Body of a successful urgency response.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyResponse {
    /// Urgency label as returned by the service, not normalized.
    pub urgency: String,
}
