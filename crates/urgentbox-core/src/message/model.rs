//! Message model.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::urgency::Urgency;
use crate::draft::Draft;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a message within one process run.
///
/// Ids increase monotonically in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Allocates the next id.
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted message.
///
/// Fields are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    sender: String,
    recipient: String,
    subject: String,
    body: String,
    urgency: Urgency,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a message, assigning a fresh id and the current time.
    #[must_use]
    pub fn new(
        sender: impl Into<String>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        urgency: Urgency,
    ) -> Self {
        Self {
            id: MessageId::next(),
            sender: sender.into(),
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            urgency,
            created_at: Utc::now(),
        }
    }

    /// Builds a message from a submitted draft.
    ///
    /// The draft's name becomes the sender and its sender-address field
    /// becomes the recipient. The form labels the address as the sender's,
    /// but the message stores it as the destination.
    #[must_use]
    pub fn from_draft(draft: Draft, urgency: Urgency) -> Self {
        let Draft {
            name,
            sender_address,
            subject,
            body,
        } = draft;
        Self::new(name, sender_address, subject, body, urgency)
    }

    /// Message id.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Submitter's display name.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Destination address.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Urgency assigned at submission.
    #[must_use]
    pub const fn urgency(&self) -> &Urgency {
        &self.urgency
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
