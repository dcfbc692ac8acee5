//! Parser for `add t/TYPE n/DESCRIPTION a/AMOUNT d/DATE c/TAG`

use crate::commands::add::MESSAGE_USAGE;
use crate::commands::AddCommand;
use crate::error::{ParseError, ParseResult};

use super::syntax::{PREFIX_AMOUNT, PREFIX_DATE, PREFIX_DESCRIPTION, PREFIX_TAG, PREFIX_TYPE};
use super::tokenizer::tokenize;
use super::util::{parse_amount, parse_date, parse_description, parse_entry_type, parse_tag};
use super::Parser;

pub struct AddCommandParser;

impl Parser<AddCommand> for AddCommandParser {
    fn parse(&self, args: &str) -> ParseResult<AddCommand> {
        let prefixes = [
            PREFIX_TYPE,
            PREFIX_DESCRIPTION,
            PREFIX_AMOUNT,
            PREFIX_DATE,
            PREFIX_TAG,
        ];
        let arg_map = tokenize(args, &prefixes);

        if !arg_map.are_prefixes_present(&prefixes) || !arg_map.preamble().is_empty() {
            return Err(ParseError::invalid_format(MESSAGE_USAGE));
        }

        let value = |prefix| {
            arg_map
                .value(prefix)
                .ok_or_else(|| ParseError::invalid_format(MESSAGE_USAGE))
        };

        // The type picks the tag vocabulary, so it is resolved first
        let entry_type = parse_entry_type(value(PREFIX_TYPE)?)?;
        let description = parse_description(value(PREFIX_DESCRIPTION)?)?;
        let amount = parse_amount(value(PREFIX_AMOUNT)?)?;
        let date = parse_date(value(PREFIX_DATE)?)?;
        let tag = parse_tag(entry_type, value(PREFIX_TAG)?)?;

        Ok(AddCommand::new(entry_type, description, amount, date, tag))
    }
}
