//! Entry model
//!
//! An entry records a single income or expenditure. Entries are immutable:
//! editing one produces a replacement that keeps the original id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::Date;
use super::description::Description;
use super::entry_type::EntryType;
use super::ids::EntryId;
use super::money::Money;
use super::tag::Tag;

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    TagTypeMismatch { entry_type: EntryType, tag: String },
    NegativeAmount,
    AmountTooLarge,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TagTypeMismatch { entry_type, tag } => {
                write!(f, "Tag '{}' is not a valid {} tag", tag, entry_type)
            }
            Self::NegativeAmount => write!(f, "Entry amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Entry amount cannot exceed {}", Money::MAX),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// A recorded income or expenditure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    entry_type: EntryType,
    description: Description,
    amount: Money,
    date: Date,
    tag: Tag,
}

/// Replacement values for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryChanges {
    pub description: Option<Description>,
    pub amount: Option<Money>,
    pub date: Option<Date>,
    pub tag: Option<Tag>,
}

impl EntryChanges {
    /// Check whether any field would change
    pub fn is_any_field_edited(&self) -> bool {
        self.description.is_some() || self.amount.is_some() || self.date.is_some() || self.tag.is_some()
    }
}

impl Entry {
    /// Create a new entry
    pub fn new(
        entry_type: EntryType,
        description: Description,
        amount: Money,
        date: Date,
        tag: Tag,
    ) -> Result<Self, EntryValidationError> {
        let entry = Self {
            id: EntryId::new(),
            entry_type,
            description,
            amount,
            date,
            tag,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Build the replacement entry for an edit
    pub fn with_changes(&self, changes: &EntryChanges) -> Result<Self, EntryValidationError> {
        let edited = Self {
            id: self.id,
            entry_type: self.entry_type,
            description: changes
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            amount: changes.amount.unwrap_or(self.amount),
            date: changes.date.unwrap_or(self.date),
            tag: changes.tag.clone().unwrap_or_else(|| self.tag.clone()),
        };
        edited.validate()?;
        Ok(edited)
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.tag.entry_type() != self.entry_type {
            return Err(EntryValidationError::TagTypeMismatch {
                entry_type: self.entry_type,
                tag: self.tag.name().to_string(),
            });
        }
        if self.amount.is_negative() {
            return Err(EntryValidationError::NegativeAmount);
        }
        if self.amount > Money::MAX {
            return Err(EntryValidationError::AmountTooLarge);
        }
        Ok(())
    }

    /// Check whether two entries record the same thing, ignoring ids
    pub fn is_same_entry(&self, other: &Entry) -> bool {
        self.entry_type == other.entry_type
            && self.description == other.description
            && self.amount == other.amount
            && self.date == other.date
            && self.tag == other.tag
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }
}
