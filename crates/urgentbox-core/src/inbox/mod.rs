//! In-memory inbox.
//!
//! Messages are kept newest-first for the lifetime of the session. The only
//! mutation is [`Inbox::append`]; tabs are read-only views over the same
//! list.

mod store;
mod tab;

pub use store::{Inbox, UrgencyCounts};
pub use tab::UrgencyTab;
