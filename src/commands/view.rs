//! `view` command

use crate::config::Settings;
use crate::display::format_entry_list;
use crate::error::PennyResult;
use crate::models::EntryType;
use crate::storage::Storage;

use super::CommandOutcome;

pub const MESSAGE_USAGE: &str = "view: Lists the income or expenditure entries.\n\
     Parameters: t/TYPE\n\
     Example: view t/i";

/// Lists the entries of one type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCommand {
    entry_type: EntryType,
}

impl ViewCommand {
    pub fn new(entry_type: EntryType) -> Self {
        Self { entry_type }
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn execute(self, storage: &mut Storage, settings: &Settings) -> PennyResult<CommandOutcome> {
        let entries = storage.entries.book().entries(self.entry_type);
        Ok(CommandOutcome::message(format_entry_list(
            entries,
            self.entry_type,
            &settings.currency_symbol,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::temp_storage;

    #[test]
    fn test_view_empty() {
        let (_dir, mut storage, settings) = temp_storage();
        let outcome = ViewCommand::new(EntryType::Income)
            .execute(&mut storage, &settings)
            .unwrap();
        assert_eq!(outcome.feedback, "No income entries recorded.\n");
    }
}
