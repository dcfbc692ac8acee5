//! Parser for `edit INDEX t/TYPE [n/DESCRIPTION] [a/AMOUNT] [d/DATE] [c/TAG]`

use crate::commands::edit::MESSAGE_USAGE;
use crate::commands::EditCommand;
use crate::error::{ParseError, ParseResult};
use crate::models::EntryChanges;

use super::syntax::{PREFIX_AMOUNT, PREFIX_DATE, PREFIX_DESCRIPTION, PREFIX_TAG, PREFIX_TYPE};
use super::tokenizer::tokenize;
use super::util::{parse_amount, parse_date, parse_description, parse_entry_type, parse_index, parse_tag};
use super::Parser;

pub struct EditCommandParser;

impl Parser<EditCommand> for EditCommandParser {
    fn parse(&self, args: &str) -> ParseResult<EditCommand> {
        let arg_map = tokenize(
            args,
            &[
                PREFIX_TYPE,
                PREFIX_DESCRIPTION,
                PREFIX_AMOUNT,
                PREFIX_DATE,
                PREFIX_TAG,
            ],
        );

        let entry_type = arg_map
            .value(PREFIX_TYPE)
            .ok_or_else(|| ParseError::invalid_format(MESSAGE_USAGE))?;
        let index = parse_index(arg_map.preamble())
            .map_err(|_| ParseError::invalid_format(MESSAGE_USAGE))?;
        let entry_type = parse_entry_type(entry_type)?;

        let changes = EntryChanges {
            description: arg_map.value(PREFIX_DESCRIPTION).map(parse_description).transpose()?,
            amount: arg_map.value(PREFIX_AMOUNT).map(parse_amount).transpose()?,
            date: arg_map.value(PREFIX_DATE).map(parse_date).transpose()?,
            tag: arg_map
                .value(PREFIX_TAG)
                .map(|tag| parse_tag(entry_type, tag))
                .transpose()?,
        };

        if !changes.is_any_field_edited() {
            return Err(ParseError::NoFieldsEdited);
        }

        Ok(EditCommand::new(index, entry_type, changes))
    }
}
