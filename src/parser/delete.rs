//! Parser for `delete INDEX t/TYPE`

use crate::commands::delete::MESSAGE_USAGE;
use crate::commands::DeleteCommand;
use crate::error::{ParseError, ParseResult};

use super::syntax::PREFIX_TYPE;
use super::tokenizer::tokenize;
use super::util::{parse_entry_type, parse_index};
use super::Parser;

pub struct DeleteCommandParser;

impl Parser<DeleteCommand> for DeleteCommandParser {
    fn parse(&self, args: &str) -> ParseResult<DeleteCommand> {
        let arg_map = tokenize(args, &[PREFIX_TYPE]);

        let entry_type = arg_map
            .value(PREFIX_TYPE)
            .ok_or_else(|| ParseError::invalid_format(MESSAGE_USAGE))?;
        let index = parse_index(arg_map.preamble())
            .map_err(|_| ParseError::invalid_format(MESSAGE_USAGE))?;

        Ok(DeleteCommand::new(index, parse_entry_type(entry_type)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::models::EntryType;

    #[test]
    fn test_parse_delete() {
        let command = DeleteCommandParser.parse("2 t/e").unwrap();
        assert_eq!(command, DeleteCommand::new(2, EntryType::Expenditure));
        let command = DeleteCommandParser.parse(" 1 t/income ").unwrap();
        assert_eq!(command, DeleteCommand::new(1, EntryType::Income));
    }

    #[test]
    fn test_bad_index_is_usage_error() {
        for args in ["t/e", "0 t/e", "-1 t/e", "one t/e", "1 2 t/e"] {
            assert_eq!(
                DeleteCommandParser.parse(args),
                Err(ParseError::invalid_format(MESSAGE_USAGE)),
                "{}",
                args
            );
        }
    }

    #[test]
    fn test_missing_type_is_usage_error() {
        assert_eq!(
            DeleteCommandParser.parse("1"),
            Err(ParseError::invalid_format(MESSAGE_USAGE))
        );
        assert!(DeleteCommandParser.parse_optional(None).unwrap_err().is_usage());
    }

    #[test]
    fn test_invalid_type_is_field_error() {
        assert_eq!(
            DeleteCommandParser.parse("1 t/savings"),
            Err(ParseError::Field(FieldError::EntryType))
        );
    }
}
