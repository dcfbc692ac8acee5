//! `edit` command

use crate::audit::AuditRecord;
use crate::config::Settings;
use crate::display::format_entry_row;
use crate::error::{PennyError, PennyResult};
use crate::models::{EntryChanges, EntryType};
use crate::storage::Storage;

use super::CommandOutcome;

pub const MESSAGE_USAGE: &str = "edit: Edits the entry at the given index of the income or expenditure list. \
     Fields that are not given keep their value.\n\
     Parameters: INDEX (must be a positive integer) t/TYPE [n/DESCRIPTION] [a/AMOUNT] [d/DATE] [c/TAG]\n\
     Example: edit 1 t/e a/15.00 c/Transport";

/// Replaces the entry at a 1-based index with an edited copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: usize,
    entry_type: EntryType,
    changes: EntryChanges,
}

impl EditCommand {
    pub fn new(index: usize, entry_type: EntryType, changes: EntryChanges) -> Self {
        Self {
            index,
            entry_type,
            changes,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn changes(&self) -> &EntryChanges {
        &self.changes
    }

    pub fn execute(self, storage: &mut Storage, settings: &Settings) -> PennyResult<CommandOutcome> {
        let book = storage.entries.book();
        let current = book
            .get(self.entry_type, self.index)
            .ok_or(PennyError::InvalidIndex { index: self.index })?;

        let edited = current
            .with_changes(&self.changes)
            .map_err(|e| PennyError::Validation(e.to_string()))?;

        let collides = book
            .entries(self.entry_type)
            .iter()
            .enumerate()
            .any(|(i, other)| i + 1 != self.index && other.is_same_entry(&edited));
        if collides {
            return Err(PennyError::DuplicateEntry);
        }

        let mut book = book.clone();
        let before = book
            .replace(self.index, edited.clone())
            .ok_or(PennyError::InvalidIndex { index: self.index })?;

        storage.commit(book)?;
        storage.audit(&AuditRecord::update(&before, &edited, &settings.currency_symbol));

        Ok(CommandOutcome::message(format!(
            "Edited {}: {}",
            self.entry_type.to_string().to_lowercase(),
            format_entry_row(&edited, &settings.currency_symbol)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::commands::test_support::{block_saves, temp_storage};
    use crate::commands::AddCommand;
    use crate::models::{Date, Description, Money, Tag};

    fn add(storage: &mut Storage, settings: &Settings, description: &str, cents: i64) {
        AddCommand::new(
            EntryType::Expenditure,
            Description::new(description).unwrap(),
            Money::from_cents(cents),
            Date::parse("03-03-2023").unwrap(),
            Tag::new(EntryType::Expenditure, "Food").unwrap(),
        )
        .execute(storage, settings)
        .unwrap();
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let (_dir, mut storage, settings) = temp_storage();
        add(&mut storage, &settings, "Coffee", 500);
        add(&mut storage, &settings, "Bagel", 300);
        let original_id = storage.entries.book().entries(EntryType::Expenditure)[0].id();

        let changes = EntryChanges {
            amount: Some(Money::from_cents(650)),
            tag: Some(Tag::new(EntryType::Expenditure, "Entertainment").unwrap()),
            ..Default::default()
        };
        let outcome = EditCommand::new(1, EntryType::Expenditure, changes)
            .execute(&mut storage, &settings)
            .unwrap();
        assert_eq!(
            outcome.feedback,
            "Edited expenditure: [03-03-2023] Coffee $6.50 (Entertainment)"
        );

        let entries = storage.entries.book().entries(EntryType::Expenditure);
        assert_eq!(entries[0].id(), original_id);
        assert_eq!(entries[0].amount().cents(), 650);
        assert_eq!(entries[1].description().as_str(), "Bagel");

        let history = storage.audit_history().unwrap();
        assert_eq!(history.last().unwrap().operation, Operation::Update);
    }

    #[test]
    fn test_edit_invalid_index() {
        let (_dir, mut storage, settings) = temp_storage();
        let changes = EntryChanges {
            amount: Some(Money::from_cents(1)),
            ..Default::default()
        };
        let result = EditCommand::new(1, EntryType::Income, changes).execute(&mut storage, &settings);
        assert!(matches!(result, Err(PennyError::InvalidIndex { index: 1 })));
    }

    #[test]
    fn test_edit_into_duplicate_rejected() {
        let (_dir, mut storage, settings) = temp_storage();
        add(&mut storage, &settings, "Coffee", 500);
        add(&mut storage, &settings, "Bagel", 500);

        let changes = EntryChanges {
            description: Some(Description::new("Coffee").unwrap()),
            ..Default::default()
        };
        let result = EditCommand::new(2, EntryType::Expenditure, changes).execute(&mut storage, &settings);
        assert!(matches!(result, Err(PennyError::DuplicateEntry)));
        assert_eq!(
            storage.entries.book().entries(EntryType::Expenditure)[1].description().as_str(),
            "Bagel"
        );
    }

    #[test]
    fn test_failed_save_keeps_original() {
        let (dir, mut storage, settings) = temp_storage();
        add(&mut storage, &settings, "Coffee", 500);
        block_saves(&dir);

        let changes = EntryChanges {
            amount: Some(Money::from_cents(900)),
            ..Default::default()
        };
        let result = EditCommand::new(1, EntryType::Expenditure, changes).execute(&mut storage, &settings);
        assert!(matches!(result, Err(PennyError::Storage(_))));
        assert_eq!(
            storage.entries.book().entries(EntryType::Expenditure)[0].amount().cents(),
            500
        );
        assert_eq!(storage.audit_history().unwrap().len(), 1);
    }
}
