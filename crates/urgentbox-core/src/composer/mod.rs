//! Message submission.
//!
//! The [`Composer`] owns the draft being written and turns it into a
//! [`Message`] in three steps:
//!
//! 1. [`Composer::begin_submit`] validates the draft and marks the composer
//!    busy, so a second submission cannot start.
//! 2. [`PendingSubmission::classify`] makes the single classifier request.
//!    Any failure is logged and the result is [`Urgency::Unknown`].
//! 3. [`Composer::complete`] builds the message, puts it at the front of the
//!    inbox and clears the draft.
//!
//! [`Composer::submit`] runs all three. The split exists for shells that
//! drive the classifier call from their own task and need to reflect the
//! busy state in the meantime.
//!
//! Dropping a [`PendingSubmission`] without completing it releases the busy
//! flag. This covers a `submit` future cancelled by an outer timeout.

mod classify;

pub use classify::Classify;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use crate::draft::{Draft, DraftField, ValidationError, validate_draft};
use crate::inbox::Inbox;
use crate::message::{Message, MessageId, Urgency};

/// Reasons a submission was not started.
///
/// Classifier failures are not here: they are absorbed into the message as
/// `unknown` urgency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// One or more required fields are empty. The draft is unchanged.
    #[error("Please fill in all fields (missing: {})", missing_fields(.0))]
    Invalid(Vec<ValidationError>),

    /// A previous submission is still waiting on the classifier.
    #[error("A message is already being sent")]
    InFlight,
}

fn missing_fields(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.field().label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Owns the draft and runs submissions.
#[derive(Debug, Default)]
pub struct Composer {
    draft: Draft,
    in_flight: Arc<AtomicBool>,
}

impl Composer {
    /// Creates a composer with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft being written.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Sets one draft field.
    pub fn update(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.update(field, value);
    }

    /// Discards the draft.
    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Returns true while a submission is waiting on the classifier.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates the draft and starts a submission.
    ///
    /// The composer stays busy until the returned [`PendingSubmission`] is
    /// passed to [`Composer::complete`] or dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] if a submission is already running,
    /// or [`SubmitError::Invalid`] listing every empty field. In both cases
    /// nothing is sent and the draft is left as it was.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            warn!("Submission rejected: another submission is in flight");
            return Err(SubmitError::InFlight);
        }

        if let Err(errors) = validate_draft(&self.draft) {
            warn!(
                missing = %missing_fields(&errors),
                "Submission rejected: required fields are empty"
            );
            return Err(SubmitError::Invalid(errors));
        }

        self.in_flight.store(true, Ordering::Release);
        Ok(PendingSubmission {
            draft: self.draft.clone(),
            guard: InFlightGuard(Arc::clone(&self.in_flight)),
        })
    }

    /// Finishes a submission.
    ///
    /// Builds the message from the draft snapshot, prepends it to `inbox`,
    /// clears the draft (including anything typed while the classifier was
    /// running) and releases the busy flag.
    pub fn complete(
        &mut self,
        pending: PendingSubmission,
        urgency: Urgency,
        inbox: &mut Inbox,
    ) -> MessageId {
        let PendingSubmission { draft, guard } = pending;
        let message = Message::from_draft(draft, urgency);
        let id = message.id();
        info!(
            id = %id,
            urgency = %message.urgency(),
            "Message added to inbox"
        );
        inbox.append(message);
        self.draft.clear();
        drop(guard);
        id
    }

    /// Validates, classifies, and stores the draft in one call.
    ///
    /// If the returned future is dropped before it finishes, nothing is
    /// stored and the composer can submit again.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] only if the submission could not start.
    /// A failing classifier never causes an error.
    pub async fn submit<C: Classify>(
        &mut self,
        classifier: &C,
        inbox: &mut Inbox,
    ) -> Result<MessageId, SubmitError> {
        let pending = self.begin_submit()?;
        let urgency = pending.classify(classifier).await;
        Ok(self.complete(pending, urgency, inbox))
    }

    /// Stores the draft without contacting a classifier.
    ///
    /// The message gets [`Urgency::Unknown`].
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the submission could not start.
    pub fn submit_unclassified(&mut self, inbox: &mut Inbox) -> Result<MessageId, SubmitError> {
        let pending = self.begin_submit()?;
        Ok(self.complete(pending, Urgency::Unknown, inbox))
    }
}

/// Clears the composer's busy flag when dropped.
#[derive(Debug)]
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A validated draft waiting for its urgency.
#[derive(Debug)]
pub struct PendingSubmission {
    draft: Draft,
    guard: InFlightGuard,
}

impl PendingSubmission {
    /// Snapshot of the draft taken when the submission started.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Asks the classifier once for the draft's urgency.
    ///
    /// Any classifier error is logged and yields [`Urgency::Unknown`].
    pub async fn classify<C: Classify>(&self, classifier: &C) -> Urgency {
        match classifier
            .classify(&self.draft.subject, &self.draft.body)
            .await
        {
            Ok(label) => {
                debug!(label = %label, "Classifier answered");
                Urgency::parse(&label)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    timeout = e.is_timeout(),
                    "Urgency classification unavailable, using unknown"
                );
                Urgency::Unknown
            }
        }
    }
}
