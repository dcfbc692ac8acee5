//! Custom error types for PennyWise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Parsing failures are split into structural
//! errors (reported with the command's usage message) and field errors
//! (reported with a field-specific message).

use thiserror::Error;

use crate::models::TagError;

/// A value supplied for a single field failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Date should be in the format DD-MM-YYYY and must be a valid calendar date")]
    Date,

    #[error("Entry type should be 'i' for income or 'e' for expenditure")]
    EntryType,

    #[error("{0}")]
    Tag(#[from] TagError),

    #[error("Amount should be a non-negative number with at most 2 decimal places")]
    Amount,

    #[error("Description should not be blank")]
    Description,

    #[error("Index is not a non-zero unsigned integer.")]
    Index,
}

/// Errors produced while turning a line of user input into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Stray preamble or missing mandatory marker
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat { usage: &'static str },

    /// A present value failed its validator
    #[error(transparent)]
    Field(#[from] FieldError),

    /// An edit command named no field to change
    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,

    /// The command word is not recognized
    #[error("Unknown command")]
    UnknownCommand(String),
}

impl ParseError {
    /// Create a structural error carrying the given usage message
    pub fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidFormat { usage }
    }

    /// Check if this is a structural (usage) error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}

/// The main error type for PennyWise operations
#[derive(Error, Debug)]
pub enum PennyError {
    /// User input could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// An index does not point at an existing entry
    #[error("The entry index provided is invalid")]
    InvalidIndex { index: usize },

    /// Duplicate entry errors
    #[error("This entry already exists in PennyWise")]
    DuplicateEntry,
}

impl From<FieldError> for PennyError {
    fn from(err: FieldError) -> Self {
        Self::Parse(ParseError::Field(err))
    }
}

impl From<std::io::Error> for PennyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PennyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for PennyWise operations
pub type PennyResult<T> = Result<T, PennyError>;

/// Result type alias for the parsing layer
pub type ParseResult<T> = Result<T, ParseError>;
