//! Storage layer for PennyWise
//!
//! Provides the entry book, its JSON persistence with atomic writes, and
//! the audit trail of changes made to it.

pub mod entries;
pub mod file_io;

pub use entries::{EntryBook, EntryRepository};
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditLogger, AuditRecord};
use crate::config::{PennywisePaths, Settings};
use crate::error::PennyError;

/// Storage coordinator owning the entry book for one session
pub struct Storage {
    pub entries: EntryRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PennywisePaths, settings: &Settings) -> Result<Self, PennyError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            entries: EntryRepository::new(paths.entries_file()),
            audit,
        })
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PennyError> {
        self.entries.load()?;
        tracing::debug!(entries = self.entries.book().len(), "loaded entry book");
        Ok(())
    }

    /// Persist a changed copy of the entry book, then adopt it
    ///
    /// On failure the session keeps the book it had before the call.
    pub fn commit(&mut self, book: EntryBook) -> Result<(), PennyError> {
        self.entries.commit(book)
    }

    /// Append a record to the audit log, if auditing is enabled
    ///
    /// Called after a change is committed, so a failed write is reported as
    /// a warning rather than failing the command.
    pub fn audit(&self, record: &AuditRecord) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(record) {
                tracing::warn!(error = %e, operation = %record.operation, "failed to write audit record");
            }
        }
    }

    /// Read back the audit log, if auditing is enabled
    pub fn audit_history(&self) -> Result<Vec<AuditRecord>, PennyError> {
        match &self.audit {
            Some(logger) => logger.read_all(),
            None => Ok(Vec::new()),
        }
    }
}
