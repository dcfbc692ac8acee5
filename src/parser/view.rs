//! Parser for `view t/TYPE`

use crate::commands::view::MESSAGE_USAGE;
use crate::commands::ViewCommand;
use crate::error::{ParseError, ParseResult};

use super::syntax::PREFIX_TYPE;
use super::tokenizer::tokenize;
use super::util::parse_entry_type;
use super::Parser;

pub struct ViewCommandParser;

impl Parser<ViewCommand> for ViewCommandParser {
    fn parse(&self, args: &str) -> ParseResult<ViewCommand> {
        let arg_map = tokenize(args, &[PREFIX_TYPE]);
        if !arg_map.preamble().is_empty() {
            return Err(ParseError::invalid_format(MESSAGE_USAGE));
        }

        let entry_type = arg_map
            .value(PREFIX_TYPE)
            .ok_or_else(|| ParseError::invalid_format(MESSAGE_USAGE))?;

        Ok(ViewCommand::new(parse_entry_type(entry_type)?))
    }
}
