//! Entry book and its repository
//!
//! The entry book holds incomes and expenditures in insertion order. Indexes
//! handed to it are 1-based, matching what users see in listings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PennyError, PennyResult};
use crate::models::{Entry, EntryType};

use super::file_io::{read_json, write_json_atomic};

/// In-memory collection of all entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryBook {
    #[serde(default)]
    incomes: Vec<Entry>,
    #[serde(default)]
    expenditures: Vec<Entry>,
}

impl EntryBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn list(&self, entry_type: EntryType) -> &Vec<Entry> {
        match entry_type {
            EntryType::Income => &self.incomes,
            EntryType::Expenditure => &self.expenditures,
        }
    }

    fn list_mut(&mut self, entry_type: EntryType) -> &mut Vec<Entry> {
        match entry_type {
            EntryType::Income => &mut self.incomes,
            EntryType::Expenditure => &mut self.expenditures,
        }
    }

    /// Entries of one type, in insertion order
    pub fn entries(&self, entry_type: EntryType) -> &[Entry] {
        self.list(entry_type)
    }

    /// Check whether an equivalent entry is already recorded
    pub fn has_entry(&self, entry: &Entry) -> bool {
        self.list(entry.entry_type())
            .iter()
            .any(|existing| existing.is_same_entry(entry))
    }

    /// Append an entry to the list of its type
    pub fn add(&mut self, entry: Entry) {
        self.list_mut(entry.entry_type()).push(entry);
    }

    /// Get the entry at a 1-based index
    pub fn get(&self, entry_type: EntryType, index: usize) -> Option<&Entry> {
        index.checked_sub(1).and_then(|i| self.list(entry_type).get(i))
    }

    /// Remove the entry at a 1-based index
    pub fn remove(&mut self, entry_type: EntryType, index: usize) -> Option<Entry> {
        let list = self.list_mut(entry_type);
        match index.checked_sub(1) {
            Some(i) if i < list.len() => Some(list.remove(i)),
            _ => None,
        }
    }

    /// Replace the entry at a 1-based index, returning the previous entry
    pub fn replace(&mut self, index: usize, entry: Entry) -> Option<Entry> {
        let slot = index
            .checked_sub(1)
            .and_then(|i| self.list_mut(entry.entry_type()).get_mut(i))?;
        Some(std::mem::replace(slot, entry))
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.incomes.clear();
        self.expenditures.clear();
    }

    pub fn len(&self) -> usize {
        self.incomes.len() + self.expenditures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(&self) -> PennyResult<()> {
        for entry_type in EntryType::all() {
            for entry in self.list(*entry_type) {
                if entry.entry_type() != *entry_type {
                    return Err(PennyError::Storage(format!(
                        "Entry {} is stored with the wrong type",
                        entry.id()
                    )));
                }
                entry
                    .validate()
                    .map_err(|e| PennyError::Storage(format!("Entry {}: {}", entry.id(), e)))?;
            }
        }
        Ok(())
    }
}

/// Repository that persists the entry book as JSON
pub struct EntryRepository {
    path: PathBuf,
    book: EntryBook,
}

impl EntryRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            book: EntryBook::new(),
        }
    }

    /// Load entries from disk, starting empty if the file does not exist
    pub fn load(&mut self) -> PennyResult<()> {
        let book: EntryBook = read_json(&self.path)?;
        book.validate()?;
        self.book = book;
        Ok(())
    }

    /// Write `book` to disk and make it the current book
    ///
    /// The current book is left untouched if the write fails.
    pub fn commit(&mut self, book: EntryBook) -> PennyResult<()> {
        write_json_atomic(&self.path, &book)?;
        self.book = book;
        Ok(())
    }

    pub fn book(&self) -> &EntryBook {
        &self.book
    }
}
