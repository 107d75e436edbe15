//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
///
/// Submission has its own error type, [`SubmitError`](crate::SubmitError);
/// classifier failures during submission never reach this enum.
#[derive(Debug, Error)]
pub enum Error {
    /// Classifier client could not be configured.
    #[error("Classifier error: {0}")]
    Classifier(#[from] urgentbox_classifier::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
