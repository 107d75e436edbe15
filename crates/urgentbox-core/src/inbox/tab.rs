//! Inbox tabs.

use crate::message::Urgency;

/// A tabbed view over the inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UrgencyTab {
    /// Every message.
    #[default]
    All,
    /// High urgency only.
    High,
    /// Medium urgency only.
    Medium,
    /// Low urgency only.
    Low,
    /// Messages the classifier could not rate.
    Unknown,
}

impl UrgencyTab {
    /// Tabs in display order.
    pub const ALL: [Self; 5] = [Self::All, Self::High, Self::Medium, Self::Low, Self::Unknown];

    /// Parse a tab name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Some(Self::All),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// The urgency this tab filters on, or `None` for the unfiltered tab.
    #[must_use]
    pub const fn urgency(&self) -> Option<Urgency> {
        match self {
            Self::All => None,
            Self::High => Some(Urgency::High),
            Self::Medium => Some(Urgency::Medium),
            Self::Low => Some(Urgency::Low),
            Self::Unknown => Some(Urgency::Unknown),
        }
    }

    /// Tab label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }
}
