//! Parser for `summary [d/DATE]`

use crate::commands::summary::MESSAGE_USAGE;
use crate::commands::SummaryCommand;
use crate::error::{ParseError, ParseResult};

use super::syntax::PREFIX_DATE;
use super::tokenizer::tokenize;
use super::util::parse_date;
use super::Parser;

pub struct SummaryCommandParser;

impl Parser<SummaryCommand> for SummaryCommandParser {
    fn parse(&self, args: &str) -> ParseResult<SummaryCommand> {
        if args.trim().is_empty() {
            return Ok(SummaryCommand::all());
        }

        let arg_map = tokenize(args, &[PREFIX_DATE]);
        if !arg_map.preamble().is_empty() {
            return Err(ParseError::invalid_format(MESSAGE_USAGE));
        }

        let date = arg_map
            .value(PREFIX_DATE)
            .ok_or_else(|| ParseError::invalid_format(MESSAGE_USAGE))?;

        Ok(SummaryCommand::on_date(parse_date(date)?))
    }
}
