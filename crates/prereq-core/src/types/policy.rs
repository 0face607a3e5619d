//! Cycle resolution policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the resolver does when the prerequisites contain a cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Fail the resolution, naming the cycle members
    Strict,
    /// Collapse each cycle into one unit sharing the summed cost
    #[default]
    Merge,
}

impl CyclePolicy {
    /// Check if cycles abort resolution
    pub fn is_strict(&self) -> bool {
        matches!(self, CyclePolicy::Strict)
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CyclePolicy::Strict => f.write_str("strict"),
            CyclePolicy::Merge => f.write_str("merge"),
        }
    }
}

impl FromStr for CyclePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(CyclePolicy::Strict),
            "merge" => Ok(CyclePolicy::Merge),
            other => Err(format!(
                "unknown cycle policy '{}', expected 'strict' or 'merge'",
                other
            )),
        }
    }
}
