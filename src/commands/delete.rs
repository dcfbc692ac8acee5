//! `delete` command

use crate::audit::AuditRecord;
use crate::config::Settings;
use crate::display::format_entry_row;
use crate::error::{PennyError, PennyResult};
use crate::models::EntryType;
use crate::storage::Storage;

use super::CommandOutcome;

pub const MESSAGE_USAGE: &str = "delete: Deletes the entry at the given index of the income or expenditure list.\n\
     Parameters: INDEX (must be a positive integer) t/TYPE\n\
     Example: delete 1 t/e";

/// Removes the entry at a 1-based index of one list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: usize,
    entry_type: EntryType,
}

impl DeleteCommand {
    pub fn new(index: usize, entry_type: EntryType) -> Self {
        Self { index, entry_type }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn execute(self, storage: &mut Storage, settings: &Settings) -> PennyResult<CommandOutcome> {
        let mut book = storage.entries.book().clone();
        let removed = book
            .remove(self.entry_type, self.index)
            .ok_or(PennyError::InvalidIndex { index: self.index })?;

        storage.commit(book)?;
        storage.audit(&AuditRecord::delete(&removed, &settings.currency_symbol));

        Ok(CommandOutcome::message(format!(
            "Deleted {}: {}",
            self.entry_type.to_string().to_lowercase(),
            format_entry_row(&removed, &settings.currency_symbol)
        )))
    }
}
