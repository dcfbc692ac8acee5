//! Command objects and their execution
//!
//! A command is built by a parser from one line of user input, executed once
//! against the session's storage, and dropped. Each command word has a fixed
//! usage message, looked up through [`CommandWord::usage`].

pub mod add;
pub mod delete;
pub mod edit;
pub mod summary;
pub mod view;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use summary::SummaryCommand;
pub use view::ViewCommand;

use crate::config::Settings;
use crate::error::PennyResult;
use crate::storage::{EntryBook, Storage};

/// Every command word PennyWise understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Add,
    Delete,
    Edit,
    View,
    Summary,
    Clear,
    Help,
    Exit,
}

pub const CLEAR_USAGE: &str = "clear: Deletes every income and expenditure entry.\n\
     Example: clear";
pub const HELP_USAGE: &str = "help: Shows how to use every command.\n\
     Example: help";
pub const EXIT_USAGE: &str = "exit: Saves and exits PennyWise.\n\
     Example: exit";

impl CommandWord {
    /// Get all command words in help order
    pub fn all() -> &'static [Self] {
        &[
            Self::Add,
            Self::Delete,
            Self::Edit,
            Self::View,
            Self::Summary,
            Self::Clear,
            Self::Help,
            Self::Exit,
        ]
    }

    /// The word typed by the user
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Edit => "edit",
            Self::View => "view",
            Self::Summary => "summary",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// The usage message reported on malformed input
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Add => add::MESSAGE_USAGE,
            Self::Delete => delete::MESSAGE_USAGE,
            Self::Edit => edit::MESSAGE_USAGE,
            Self::View => view::MESSAGE_USAGE,
            Self::Summary => summary::MESSAGE_USAGE,
            Self::Clear => CLEAR_USAGE,
            Self::Help => HELP_USAGE,
            Self::Exit => EXIT_USAGE,
        }
    }

    /// Find a command word, ignoring case
    pub fn find(word: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|cmd| cmd.word().eq_ignore_ascii_case(word))
    }
}

/// Usage of every command, separated by blank lines
pub fn help_text() -> String {
    CommandWord::all()
        .iter()
        .map(|cmd| cmd.usage())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// What the caller should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Message shown to the user
    pub feedback: String,
    /// Whether the session should end
    pub exit: bool,
}

impl CommandOutcome {
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

/// A parsed, ready-to-run command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    View(ViewCommand),
    Summary(SummaryCommand),
    Clear,
    Help,
    Exit,
}

impl Command {
    /// The command word this command was parsed from
    pub fn word(&self) -> CommandWord {
        match self {
            Self::Add(_) => CommandWord::Add,
            Self::Delete(_) => CommandWord::Delete,
            Self::Edit(_) => CommandWord::Edit,
            Self::View(_) => CommandWord::View,
            Self::Summary(_) => CommandWord::Summary,
            Self::Clear => CommandWord::Clear,
            Self::Help => CommandWord::Help,
            Self::Exit => CommandWord::Exit,
        }
    }

    /// Execute the command against the session's storage
    ///
    /// Commands that change the entry book save it before returning.
    pub fn execute(self, storage: &mut Storage, settings: &Settings) -> PennyResult<CommandOutcome> {
        tracing::debug!(command = self.word().word(), "executing command");

        match self {
            Self::Add(cmd) => cmd.execute(storage, settings),
            Self::Delete(cmd) => cmd.execute(storage, settings),
            Self::Edit(cmd) => cmd.execute(storage, settings),
            Self::View(cmd) => cmd.execute(storage, settings),
            Self::Summary(cmd) => cmd.execute(storage, settings),
            Self::Clear => execute_clear(storage),
            Self::Help => Ok(CommandOutcome::message(help_text())),
            Self::Exit => Ok(CommandOutcome::exit("Goodbye!")),
        }
    }
}

fn execute_clear(storage: &mut Storage) -> PennyResult<CommandOutcome> {
    let removed = storage.entries.book().len();
    storage.commit(EntryBook::new())?;
    storage.audit(&crate::audit::AuditRecord::clear(removed));
    Ok(CommandOutcome::message("All entries have been cleared!"))
}


#[cfg(test)]
mod tests {
    use super::test_support::temp_storage;
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Date, Description, EntryType, Money, Tag};

    #[test]
    fn test_find_command_word() {
        assert_eq!(CommandWord::find("summary"), Some(CommandWord::Summary));
        assert_eq!(CommandWord::find("ADD"), Some(CommandWord::Add));
        assert_eq!(CommandWord::find("remove"), None);
        for cmd in CommandWord::all() {
            assert_eq!(CommandWord::find(cmd.word()), Some(*cmd));
        }
    }

    #[test]
    fn test_help_lists_every_usage() {
        let help = help_text();
        for cmd in CommandWord::all() {
            assert!(help.contains(cmd.usage()));
        }
    }

    #[test]
    fn test_exit_ends_session() {
        let (_dir, mut storage, settings) = temp_storage();
        let outcome = Command::Exit.execute(&mut storage, &settings).unwrap();
        assert!(outcome.exit);
        let outcome = Command::Help.execute(&mut storage, &settings).unwrap();
        assert!(!outcome.exit);
    }

    #[test]
    fn test_clear_empties_book_and_audits() {
        let (_dir, mut storage, settings) = temp_storage();
        let add = AddCommand::new(
            EntryType::Income,
            Description::new("Pay").unwrap(),
            Money::from_cents(100000),
            Date::parse("01-01-2023").unwrap(),
            Tag::new(EntryType::Income, "Salary").unwrap(),
        );
        Command::Add(add).execute(&mut storage, &settings).unwrap();

        Command::Clear.execute(&mut storage, &settings).unwrap();
        assert!(storage.entries.book().is_empty());

        let history = storage.audit_history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].operation, Operation::Clear);
    }

    #[test]
    fn test_failed_clear_keeps_entries() {
        let (dir, mut storage, settings) = temp_storage();
        let add = AddCommand::new(
            EntryType::Expenditure,
            Description::new("Bus").unwrap(),
            Money::from_cents(250),
            Date::parse("01-01-2023").unwrap(),
            Tag::new(EntryType::Expenditure, "Transport").unwrap(),
        );
        Command::Add(add).execute(&mut storage, &settings).unwrap();
        test_support::block_saves(&dir);

        let result = Command::Clear.execute(&mut storage, &settings);
        assert!(matches!(result, Err(crate::PennyError::Storage(_))));
        assert_eq!(storage.entries.book().len(), 1);
        assert_eq!(storage.audit_history().unwrap().len(), 1);
    }
}
