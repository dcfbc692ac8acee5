//! Calendar date of an entry, written as `DD-MM-YYYY`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// strftime pattern for the date format accepted on the command line
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// A validated calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

/// Error type for date parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError(String);

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid date: {}", self.0)
    }
}

impl std::error::Error for DateParseError {}

impl Date {
    /// Parse a date in the `DD-MM-YYYY` format
    ///
    /// The shape is checked literally (two digits, dash, two digits, dash,
    /// four digits) before chrono checks that the day exists.
    pub fn parse(s: &str) -> Result<Self, DateParseError> {
        let s = s.trim();
        if !has_date_shape(s) {
            return Err(DateParseError(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateParseError(s.to_string()))
    }
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
