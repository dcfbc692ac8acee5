//! Audit record data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::format_entry_row;
use crate::models::{Entry, EntryType};

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// Every entry was removed at once
    Clear,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Clear => write!(f, "CLEAR"),
        }
    }
}

/// A single line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Affected entry, absent for a clear
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<EntryType>,

    /// Entry state before an update or delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entry state after a create or update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable summary, e.g. the entry as listed
    pub summary: String,
}

impl AuditRecord {
    fn for_entry(operation: Operation, entry: &Entry, currency_symbol: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entry_id: Some(entry.id().to_string()),
            entry_type: Some(entry.entry_type()),
            before: None,
            after: None,
            summary: format_entry_row(entry, currency_symbol),
        }
    }

    pub fn create(entry: &Entry, currency_symbol: &str) -> Self {
        Self {
            after: serde_json::to_value(entry).ok(),
            ..Self::for_entry(Operation::Create, entry, currency_symbol)
        }
    }

    pub fn update(before: &Entry, after: &Entry, currency_symbol: &str) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary: format!(
                "{} -> {}",
                format_entry_row(before, currency_symbol),
                format_entry_row(after, currency_symbol)
            ),
            ..Self::for_entry(Operation::Update, after, currency_symbol)
        }
    }

    pub fn delete(entry: &Entry, currency_symbol: &str) -> Self {
        Self {
            before: serde_json::to_value(entry).ok(),
            ..Self::for_entry(Operation::Delete, entry, currency_symbol)
        }
    }

    pub fn clear(removed: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Clear,
            entry_id: None,
            entry_type: None,
            before: None,
            after: None,
            summary: format!("Removed {} entries", removed),
        }
    }
}
