//! Handling categories and the dispatch truth table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The handling category assigned to a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Neither bulky nor heavy, goes to the standard line.
    Standard,
    /// Bulky or heavy, but not both. Needs special handling.
    Special,
    /// Both bulky and heavy. Cannot be handled automatically.
    Rejected,
}

impl Classification {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Standard => "STANDARD",
            Classification::Special => "SPECIAL",
            Classification::Rejected => "REJECTED",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "STANDARD" => Some(Classification::Standard),
            "SPECIAL" => Some(Classification::Special),
            "REJECTED" => Some(Classification::Rejected),
            _ => None,
        }
    }

    /// Dispatch from the two package predicates.
    pub fn from_flags(bulky: bool, heavy: bool) -> Self {
        match (bulky, heavy) {
            (true, true) => Classification::Rejected,
            (true, false) | (false, true) => Classification::Special,
            (false, false) => Classification::Standard,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
