//! Free-text description of an entry

use serde::{Deserialize, Serialize};
use std::fmt;

/// A trimmed, non-blank description
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

/// Validation errors for descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    Blank,
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "Description cannot be blank"),
        }
    }
}

impl std::error::Error for DescriptionError {}

impl Description {
    /// Create a description, trimming surrounding whitespace
    pub fn new(text: impl AsRef<str>) -> Result<Self, DescriptionError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(DescriptionError::Blank);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = DescriptionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
