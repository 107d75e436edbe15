//! Draft validation.

use super::model::{Draft, DraftField};

/// A required draft field is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty.
    EmptyName,
    /// Sender address is empty.
    EmptySenderAddress,
    /// Subject is empty.
    EmptySubject,
    /// Body is empty.
    EmptyBody,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyName => "Your name is required",
            Self::EmptySenderAddress => "Sender email is required",
            Self::EmptySubject => "Subject is required",
            Self::EmptyBody => "Message body is required",
        }
    }

    /// Get the field this error relates to.
    #[must_use]
    pub const fn field(&self) -> DraftField {
        match self {
            Self::EmptyName => DraftField::Name,
            Self::EmptySenderAddress => DraftField::SenderAddress,
            Self::EmptySubject => DraftField::Subject,
            Self::EmptyBody => DraftField::Body,
        }
    }

    const fn for_field(field: DraftField) -> Self {
        match field {
            DraftField::Name => Self::EmptyName,
            DraftField::SenderAddress => Self::EmptySenderAddress,
            DraftField::Subject => Self::EmptySubject,
            DraftField::Body => Self::EmptyBody,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a draft.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate a draft.
///
/// Every field must be non-empty. Content is not examined, so a field
/// holding only spaces counts as present and the address is not checked for
/// email syntax.
///
/// # Errors
///
/// Returns one `ValidationError` per empty field, in form order.
pub fn validate_draft(draft: &Draft) -> ValidationResult {
    let errors: Vec<ValidationError> = DraftField::ALL
        .into_iter()
        .filter(|field| draft.get(*field).is_empty())
        .map(ValidationError::for_field)
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
