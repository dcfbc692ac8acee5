//! Field validators
//!
//! Each function turns the raw text of one field into a validated value, or
//! reports a `FieldError` whose message is shown to the user as is.

use crate::error::FieldError;
use crate::models::{Date, Description, EntryType, Money, Tag};

/// Parse a 1-based index, e.g. the `2` in `delete 2 t/e`
pub fn parse_index(s: &str) -> Result<usize, FieldError> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::Index);
    }
    match s.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(FieldError::Index),
    }
}

/// Parse a `DD-MM-YYYY` date
pub fn parse_date(s: &str) -> Result<Date, FieldError> {
    Date::parse(s).map_err(|_| FieldError::Date)
}

/// Parse an entry type (`i`/`income` or `e`/`expenditure`)
pub fn parse_entry_type(s: &str) -> Result<EntryType, FieldError> {
    EntryType::parse(s).ok_or(FieldError::EntryType)
}

/// Parse a tag for an entry of the given type
///
/// The entry type must already be resolved since it selects the vocabulary.
pub fn parse_tag(entry_type: EntryType, s: &str) -> Result<Tag, FieldError> {
    Ok(Tag::new(entry_type, s.trim())?)
}

/// Parse an amount
pub fn parse_amount(s: &str) -> Result<Money, FieldError> {
    Money::parse(s).map_err(|_| FieldError::Amount)
}

/// Parse a description
pub fn parse_description(s: &str) -> Result<Description, FieldError> {
    Description::new(s).map_err(|_| FieldError::Description)
}
