//! Entry type: whether an entry records money coming in or going out

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of entry PennyWise tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expenditure,
}

impl EntryType {
    /// Get all entry types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expenditure]
    }

    /// Parse an entry type from user input
    ///
    /// Accepts `i`, `income`, `e` and `expenditure`, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" | "income" => Some(Self::Income),
            "e" | "expenditure" => Some(Self::Expenditure),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expenditure => write!(f, "Expenditure"),
        }
    }
}
