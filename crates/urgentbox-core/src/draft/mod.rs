//! The compose form.
//!
//! A [`Draft`] holds the four user-entered fields while a message is being
//! written. It is only submittable once every field has content; see
//! [`validate_draft`].

mod model;
mod validation;

pub use model::{Draft, DraftField};
pub use validation::{ValidationError, ValidationResult, validate_draft};
