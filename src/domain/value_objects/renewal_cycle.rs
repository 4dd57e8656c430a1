//! Renewal Cycle Value Object

use std::fmt;

use serde::{Deserialize, Serialize};

/// How often a required document must be refreshed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RenewalCycle {
    /// Filed once, never goes stale (ID cards, bylaws)
    OneTime,
    /// Must be refreshed every year
    #[default]
    Annual,
    /// Must be refreshed every calendar quarter
    Quarterly,
}

impl fmt::Display for RenewalCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RenewalCycle::OneTime => "one-time",
            RenewalCycle::Annual => "annual",
            RenewalCycle::Quarterly => "quarterly",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_kebab_case() {
        let cycle: RenewalCycle = serde_json::from_str(r#""one-time""#).unwrap();
        assert_eq!(cycle, RenewalCycle::OneTime);
        assert_eq!(RenewalCycle::Quarterly.to_string(), "quarterly");
    }
}
