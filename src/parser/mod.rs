//! Command-line parsing
//!
//! A line of input is split into a command word and its arguments. The
//! arguments are tokenized on field markers (`t/`, `n/`, `a/`, `d/`, `c/`)
//! and handed to the parser for that command word, which validates every
//! field and builds the command.
//!
//! Parsers report two kinds of failure: a structural error carrying the
//! command's usage message, or a field error naming the invalid value.

pub mod add;
pub mod delete;
pub mod edit;
pub mod summary;
pub mod syntax;
pub mod tokenizer;
pub mod util;
pub mod view;

pub use add::AddCommandParser;
pub use delete::DeleteCommandParser;
pub use edit::EditCommandParser;
pub use summary::SummaryCommandParser;
pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};
pub use view::ViewCommandParser;

use crate::commands::{Command, CommandWord, HELP_USAGE};
use crate::error::{ParseError, ParseResult};

/// Turns the argument text of one command word into a command
pub trait Parser<T> {
    fn parse(&self, args: &str) -> ParseResult<T>;

    /// Parse arguments that may be absent entirely
    ///
    /// Absent arguments are treated exactly like an empty string.
    fn parse_optional(&self, args: Option<&str>) -> ParseResult<T> {
        self.parse(args.unwrap_or(""))
    }
}

/// Routes a line of user input to the parser for its command word
pub struct PennyParser;

impl PennyParser {
    /// Parse one line of user input into a command
    pub fn parse_command(input: &str) -> ParseResult<Command> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::invalid_format(HELP_USAGE));
        }

        let (word, args) = input
            .split_once(char::is_whitespace)
            .unwrap_or((input, ""));
        let command_word =
            CommandWord::find(word).ok_or_else(|| ParseError::UnknownCommand(word.to_string()))?;

        tracing::trace!(command = command_word.word(), args, "parsing command");

        Ok(match command_word {
            CommandWord::Add => Command::Add(AddCommandParser.parse(args)?),
            CommandWord::Delete => Command::Delete(DeleteCommandParser.parse(args)?),
            CommandWord::Edit => Command::Edit(EditCommandParser.parse(args)?),
            CommandWord::View => Command::View(ViewCommandParser.parse(args)?),
            CommandWord::Summary => Command::Summary(SummaryCommandParser.parse(args)?),
            CommandWord::Clear => Command::Clear,
            CommandWord::Help => Command::Help,
            CommandWord::Exit => Command::Exit,
        })
    }
}
