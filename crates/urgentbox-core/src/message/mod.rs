//! Submitted messages and their urgency.

mod model;
mod urgency;

pub use model::{Message, MessageId};
pub use urgency::Urgency;
