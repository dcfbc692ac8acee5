//! Entry display formatting

use crate::models::{Entry, EntryType};

/// Format a single entry as a listing row (without its index)
pub fn format_entry_row(entry: &Entry, currency_symbol: &str) -> String {
    format!(
        "[{}] {} {} ({})",
        entry.date(),
        entry.description(),
        entry.amount().format_with_symbol(currency_symbol),
        entry.tag()
    )
}

/// Format a numbered list of entries of one type
pub fn format_entry_list(entries: &[Entry], entry_type: EntryType, currency_symbol: &str) -> String {
    if entries.is_empty() {
        return format!("No {} entries recorded.\n", entry_type.to_string().to_lowercase());
    }

    let mut output = format!("{} entries:\n", entry_type);
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, format_entry_row(entry, currency_symbol)));
    }
    output
}
