//! Inbox storage.

use std::collections::VecDeque;

use super::tab::UrgencyTab;
use crate::message::{Message, MessageId, Urgency};

/// Newest-first list of submitted messages.
///
/// Mutated only through `&mut self`, so a single owner serializes appends.
/// Share it across tasks behind a `tokio::sync::Mutex`.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    messages: VecDeque<Message>,
}

/// Number of messages per urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrgencyCounts {
    /// High urgency.
    pub high: usize,
    /// Medium urgency.
    pub medium: usize,
    /// Low urgency.
    pub low: usize,
    /// Classification unavailable.
    pub unknown: usize,
    /// Labels outside the expected set.
    pub other: usize,
}

impl UrgencyCounts {
    /// Total messages counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.high + self.medium + self.low + self.unknown + self.other
    }

    /// Badge count for a tab.
    #[must_use]
    pub const fn for_tab(&self, tab: UrgencyTab) -> usize {
        match tab {
            UrgencyTab::All => self.total(),
            UrgencyTab::High => self.high,
            UrgencyTab::Medium => self.medium,
            UrgencyTab::Low => self.low,
            UrgencyTab::Unknown => self.unknown,
        }
    }
}

impl Inbox {
    /// Creates an empty inbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a message at the front.
    pub fn append(&mut self, message: Message) {
        self.messages.push_front(message);
    }

    /// All messages, newest first.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &Message> + ExactSizeIterator {
        self.messages.iter()
    }

    /// Messages with the given urgency, newest first.
    pub fn filter_by_urgency(
        &self,
        level: Urgency,
    ) -> impl DoubleEndedIterator<Item = &Message> {
        self.messages.iter().filter(move |m| *m.urgency() == level)
    }

    /// Messages shown under a tab.
    ///
    /// Messages with labels outside the expected set appear only under
    /// [`UrgencyTab::All`].
    #[must_use]
    pub fn view(&self, tab: UrgencyTab) -> Vec<&Message> {
        match tab.urgency() {
            None => self.all().collect(),
            Some(level) => self.filter_by_urgency(level).collect(),
        }
    }

    /// Looks up a message by id.
    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == id)
    }

    /// Per-urgency message counts.
    #[must_use]
    pub fn counts(&self) -> UrgencyCounts {
        self.messages
            .iter()
            .fold(UrgencyCounts::default(), |mut counts, m| {
                match m.urgency() {
                    Urgency::High => counts.high += 1,
                    Urgency::Medium => counts.medium += 1,
                    Urgency::Low => counts.low += 1,
                    Urgency::Unknown => counts.unknown += 1,
                    Urgency::Other(_) => counts.other += 1,
                }
                counts
            })
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if nothing has been submitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
