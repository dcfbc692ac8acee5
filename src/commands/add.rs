//! `add` command

use crate::audit::AuditRecord;
use crate::config::Settings;
use crate::display::format_entry_row;
use crate::error::{PennyError, PennyResult};
use crate::models::{Date, Description, Entry, EntryType, Money, Tag};
use crate::storage::Storage;

use super::CommandOutcome;

pub const MESSAGE_USAGE: &str = "add: Adds an income or expenditure entry.\n\
     Parameters: t/TYPE n/DESCRIPTION a/AMOUNT d/DATE c/TAG\n\
     Example: add t/e n/Lunch a/12.50 d/10-10-2023 c/Food";

/// Adds one entry to the entry book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    entry_type: EntryType,
    description: Description,
    amount: Money,
    date: Date,
    tag: Tag,
}

impl AddCommand {
    pub fn new(
        entry_type: EntryType,
        description: Description,
        amount: Money,
        date: Date,
        tag: Tag,
    ) -> Self {
        Self {
            entry_type,
            description,
            amount,
            date,
            tag,
        }
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

    pub fn execute(self, storage: &mut Storage, settings: &Settings) -> PennyResult<CommandOutcome> {
        let entry = Entry::new(
            self.entry_type,
            self.description,
            self.amount,
            self.date,
            self.tag,
        )
        .map_err(|e| PennyError::Validation(e.to_string()))?;

        if storage.entries.book().has_entry(&entry) {
            return Err(PennyError::DuplicateEntry);
        }

        let feedback = format!(
            "New {} added: {}",
            entry.entry_type().to_string().to_lowercase(),
            format_entry_row(&entry, &settings.currency_symbol)
        );

        let mut book = storage.entries.book().clone();
        book.add(entry.clone());
        storage.commit(book)?;
        storage.audit(&AuditRecord::create(&entry, &settings.currency_symbol));

        Ok(CommandOutcome::message(feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{block_saves, temp_storage};

    fn lunch() -> AddCommand {
        AddCommand::new(
            EntryType::Expenditure,
            Description::new("Lunch").unwrap(),
            Money::from_cents(1250),
            Date::parse("10-10-2023").unwrap(),
            Tag::new(EntryType::Expenditure, "Food").unwrap(),
        )
    }

    #[test]
    fn test_add_entry() {
        let (_dir, mut storage, settings) = temp_storage();
        let outcome = lunch().execute(&mut storage, &settings).unwrap();

        assert_eq!(
            outcome.feedback,
            "New expenditure added: [10-10-2023] Lunch $12.50 (Food)"
        );
        assert_eq!(storage.entries.book().entries(EntryType::Expenditure).len(), 1);
        assert_eq!(storage.audit_history().unwrap().len(), 1);
    }

    #[test]
    fn test_add_persists() {
        let (_dir, mut storage, settings) = temp_storage();
        lunch().execute(&mut storage, &settings).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.entries.book().len(), 1);
    }

    #[test]
    fn test_failed_save_leaves_book_unchanged() {
        let (dir, mut storage, settings) = temp_storage();
        block_saves(&dir);

        let result = lunch().execute(&mut storage, &settings);
        assert!(matches!(result, Err(PennyError::Storage(_))));
        assert!(storage.entries.book().is_empty());
        assert!(storage.audit_history().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let (_dir, mut storage, settings) = temp_storage();
        lunch().execute(&mut storage, &settings).unwrap();

        let result = lunch().execute(&mut storage, &settings);
        assert!(matches!(result, Err(PennyError::DuplicateEntry)));
        assert_eq!(storage.entries.book().len(), 1);
    }
}
