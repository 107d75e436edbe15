//! Urgency classification seam.

use std::future::Future;

use urgentbox_classifier::ClassifierClient;

/// Something that can rate the urgency of a message.
///
/// Implementations return the raw label; the composer normalizes it and
/// turns any error into [`Urgency::Unknown`](crate::Urgency::Unknown).
pub trait Classify {
    /// Classifies a subject/body pair.
    fn classify(
        &self,
        subject: &str,
        body: &str,
    ) -> impl Future<Output = urgentbox_classifier::Result<String>> + Send;
}

impl Classify for ClassifierClient {
    fn classify(
        &self,
        subject: &str,
        body: &str,
    ) -> impl Future<Output = urgentbox_classifier::Result<String>> + Send {
        Self::classify(self, subject, body)
    }
}
