//! # urgentbox-core
//!
//! Core logic for the `urgentbox` message composer.
//!
//! This crate provides:
//! - **Drafts** - the editable compose form and its presence validation
//! - **Messages** - immutable submitted records tagged with an urgency level
//! - **Composer** - the submission workflow, including the classifier call
//!   and its `unknown` fallback
//! - **Inbox** - the newest-first message list with urgency tabs
//! - **Settings** - classifier location and timeout
//!
//! # Example
//!
//! ```ignore
//! use urgentbox_core::{Composer, DraftField, Inbox, Settings};
//!
//! let settings = Settings::load(&Settings::default_path()).await?.with_env_overrides()?;
//! let classifier = settings.classifier_client()?.expect("classifier configured");
//!
//! let mut inbox = Inbox::new();
//! let mut composer = Composer::new();
//! composer.update(DraftField::Name, "Jane");
//! composer.update(DraftField::SenderAddress, "jane@x.com");
//! composer.update(DraftField::Subject, "Help");
//! composer.update(DraftField::Body, "Need assistance");
//!
//! // Classifier failures never surface here; the message is stored as `unknown`.
//! let id = composer.submit(&classifier, &mut inbox).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod composer;
pub mod draft;
mod error;
pub mod inbox;
pub mod message;
pub mod settings;

pub use composer::{Classify, Composer, PendingSubmission, SubmitError};
pub use draft::{Draft, DraftField, ValidationError, ValidationResult, validate_draft};
pub use error::{Error, Result};
pub use inbox::{Inbox, UrgencyCounts, UrgencyTab};
pub use message::{Message, MessageId, Urgency};
pub use settings::{ClassifierSettings, Settings};
