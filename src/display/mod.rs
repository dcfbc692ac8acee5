//! Display formatting for terminal output

pub mod entry;

pub use entry::{format_entry_list, format_entry_row};
