//! Tag model
//!
//! Tags classify entries using a small closed vocabulary that depends on
//! the entry type. A `Tag` can only be obtained through `Tag::new`, so every
//! tag in the system has a name that is alphanumeric and belongs to the
//! vocabulary of the type it was validated against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

use super::entry_type::EntryType;

/// Tag names permitted on income entries
pub const INCOME_TAGS: &[&str] = &[
    "Salary",
    "Allowance",
    "Profit",
    "Investment",
    "Gifts",
    "Others",
];

/// Tag names permitted on expenditure entries
pub const EXPENDITURE_TAGS: &[&str] = &[
    "Food",
    "Groceries",
    "Entertainment",
    "Transport",
    "Education",
    "Housing",
    "Others",
];

pub const MESSAGE_CONSTRAINTS: &str = "Tag names should be alphanumeric";
pub const INCOME_CONSTRAINTS: &str = "Income tag must only be one of the following: \n\
     Salary, Allowance, Profit, Investment, Gifts, Others";
pub const EXPENDITURE_CONSTRAINTS: &str = "Expenditure tag must only be one of the following: \n\
     Food, Groceries, Entertainment, Transport, Education, Housing, Others";

/// Validation errors for tags
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    #[error("{}", MESSAGE_CONSTRAINTS)]
    NotAlphanumeric,

    #[error("{}", vocabulary_message(.0))]
    NotInVocabulary(EntryType),
}

/// The vocabulary of tag names for an entry type
pub fn vocabulary(entry_type: EntryType) -> &'static [&'static str] {
    match entry_type {
        EntryType::Income => INCOME_TAGS,
        EntryType::Expenditure => EXPENDITURE_TAGS,
    }
}

fn vocabulary_message(entry_type: &EntryType) -> &'static str {
    match entry_type {
        EntryType::Income => INCOME_CONSTRAINTS,
        EntryType::Expenditure => EXPENDITURE_CONSTRAINTS,
    }
}

fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// A validated tag
///
/// Equality and hashing consider the name only: `Others` as an income tag
/// equals `Others` as an expenditure tag. Use [`Tag::entry_type`] when the
/// type matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TagRecord", into = "TagRecord")]
pub struct Tag {
    name: String,
    entry_type: EntryType,
}

impl Tag {
    /// Create a tag, validating `name` against the vocabulary of `entry_type`
    pub fn new(entry_type: EntryType, name: impl Into<String>) -> Result<Self, TagError> {
        let name = name.into();
        Self::check(entry_type, &name)?;
        Ok(Self { name, entry_type })
    }

    /// Returns true if `candidate` is a valid tag name for `entry_type`
    pub fn is_valid_tag_name(entry_type: EntryType, candidate: &str) -> bool {
        Self::check(entry_type, candidate).is_ok()
    }

    fn check(entry_type: EntryType, candidate: &str) -> Result<(), TagError> {
        if !is_alphanumeric(candidate) {
            return Err(TagError::NotAlphanumeric);
        }
        if !vocabulary(entry_type).contains(&candidate) {
            return Err(TagError::NotInVocabulary(entry_type));
        }
        Ok(())
    }

    /// Get the tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the entry type this tag was validated against
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// On-disk form of a tag; converted back through `Tag::new`
#[derive(Serialize, Deserialize)]
struct TagRecord {
    name: String,
    entry_type: EntryType,
}

impl TryFrom<TagRecord> for Tag {
    type Error = TagError;

    fn try_from(record: TagRecord) -> Result<Self, Self::Error> {
        Tag::new(record.entry_type, record.name)
    }
}

impl From<Tag> for TagRecord {
    fn from(tag: Tag) -> Self {
        Self {
            name: tag.name,
            entry_type: tag.entry_type,
        }
    }
}
