//! Command-line markers shared by the command parsers

use super::tokenizer::Prefix;

pub const PREFIX_TYPE: Prefix = Prefix::new("t/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("n/");
pub const PREFIX_AMOUNT: Prefix = Prefix::new("a/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_TAG: Prefix = Prefix::new("c/");
