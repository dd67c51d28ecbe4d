//! Contribution Intervals
//!
//! How often a contribution recurs, and the display text that goes with it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// How often a contribution recurs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributionInterval {
    #[serde(rename = "one_time")]
    OneTime,
    #[serde(rename = "month")]
    Monthly,
    #[serde(rename = "year")]
    Yearly,
}

impl ContributionInterval {
    /// Wire name used by the payments API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }

    /// Adjective for fee copy, e.g. "Monthly fee"
    pub fn adjective(&self) -> &'static str {
        match self {
            Self::OneTime => "One-time",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Suffix appended to a displayed fee amount, e.g. "$1.23 monthly"
    pub fn rate_suffix(&self) -> &'static str {
        match self {
            Self::OneTime => "",
            Self::Monthly => " monthly",
            Self::Yearly => " yearly",
        }
    }

    /// Whether the contribution recurs
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Self::OneTime)
    }
}

impl FromStr for ContributionInterval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one_time" => Ok(Self::OneTime),
            "month" => Ok(Self::Monthly),
            "year" => Ok(Self::Yearly),
            other => Err(CoreError::UnknownInterval(other.into())),
        }
    }
}

impl fmt::Display for ContributionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for interval in [
            ContributionInterval::OneTime,
            ContributionInterval::Monthly,
            ContributionInterval::Yearly,
        ] {
            assert_eq!(interval.as_str().parse::<ContributionInterval>(), Ok(interval));
        }
    }

    #[test]
    fn test_unknown_interval_is_an_error() {
        let err = "weekly".parse::<ContributionInterval>().unwrap_err();
        assert_eq!(err, CoreError::UnknownInterval("weekly".into()));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ContributionInterval::Monthly).unwrap();
        assert_eq!(json, "\"month\"");
        let parsed: ContributionInterval = serde_json::from_str("\"one_time\"").unwrap();
        assert_eq!(parsed, ContributionInterval::OneTime);
    }
}
