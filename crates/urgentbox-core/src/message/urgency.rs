//! Urgency levels.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Urgency of a message.
///
/// `Unknown` is the fallback when the classifier could not be reached or gave
/// an unusable answer. A classifier that answers `unknown` itself is filed
/// the same way, so the two cases are indistinguishable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Urgency {
    /// Needs attention now.
    High,
    /// Should be looked at soon.
    Medium,
    /// Can wait.
    Low,
    /// Classification unavailable.
    #[default]
    Unknown,
    /// A label the classifier returned outside the expected set, lower-cased.
    Other(String),
}

impl Urgency {
    /// Parse a classifier label.
    ///
    /// Matching is case-insensitive. Labels outside `high`/`medium`/`low`/`unknown`
    /// are kept, lower-cased, as [`Urgency::Other`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            "unknown" => Self::Unknown,
            _ => Self::Other(lower),
        }
    }

    /// Lower-case level string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
            Self::Other(label) => label,
        }
    }

    /// Human-readable name, capitalized.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.as_str().chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Colored marker for list rendering.
    ///
    /// Anything that is not high or medium is shown with the low marker.
    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟠",
            Self::Low | Self::Unknown | Self::Other(_) => "🟢",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Urgency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for Urgency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Urgency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_folds() {
        assert_eq!(Urgency::parse("HIGH"), Urgency::High);
        assert_eq!(Urgency::parse("Medium"), Urgency::Medium);
        assert_eq!(Urgency::parse("low"), Urgency::Low);
        assert_eq!(Urgency::parse("UNKNOWN"), Urgency::Unknown);
    }

    #[test]
    fn test_parse_passes_through_other_labels() {
        assert_eq!(Urgency::parse("Critical"), Urgency::Other("critical".into()));
        assert_eq!(Urgency::parse(" high"), Urgency::Other(" high".into()));
        assert_eq!(Urgency::parse("Critical").as_str(), "critical");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Urgency::High.display_name(), "High");
        assert_eq!(Urgency::Unknown.display_name(), "Unknown");
        assert_eq!(Urgency::Other("critical".into()).display_name(), "Critical");
        assert_eq!(Urgency::Other(String::new()).display_name(), "");
    }

    #[test]
    fn test_indicator_defaults_to_low() {
        assert_eq!(Urgency::High.indicator(), "🔴");
        assert_eq!(Urgency::Medium.indicator(), "🟠");
        assert_eq!(Urgency::Low.indicator(), "🟢");
        assert_eq!(Urgency::Unknown.indicator(), Urgency::Low.indicator());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Urgency::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: Urgency = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(parsed, Urgency::Low);
    }
}
