//! Prefix tokenizer
//!
//! Splits an argument string such as `t/e n/Lunch a/12.50` into the text
//! before the first marker (the preamble) and the values that follow each
//! marker. The tokenizer never fails; deciding what is acceptable is left to
//! the command parsers.

use std::collections::HashMap;

/// A marker that introduces a field value, e.g. `d/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Tokenized arguments: the preamble plus every value seen for each marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// The trimmed text before the first recognized marker
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The first value given for `prefix`, if any
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order of appearance
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if every prefix has at least one value
    pub fn are_prefixes_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.value(*p).is_some())
    }
}

/// Tokenize `args` against the given markers
///
/// A marker is recognized only at the start of the input or right after
/// whitespace, so `c/` inside `abc/def` is plain text.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);

    let preamble_end = positions.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    let mut at_boundary = true;

    for (i, c) in args.char_indices() {
        if at_boundary {
            // Longest match wins when one marker is a prefix of another
            let matched = prefixes
                .iter()
                .filter(|p| args[i..].starts_with(p.as_str()))
                .max_by_key(|p| p.as_str().len());
            if let Some(prefix) = matched {
                positions.push((i, *prefix));
            }
        }
        at_boundary = c.is_whitespace();
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: Prefix = Prefix::new("d/");
    const TYPE: Prefix = Prefix::new("t/");
    const TAG: Prefix = Prefix::new("c/");

    #[test]
    fn test_empty_input() {
        let map = tokenize("", &[DATE]);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(DATE), None);
        assert!(map.all_values(DATE).is_empty());
    }

    #[test]
    fn test_preamble_only() {
        let map = tokenize("  some text  ", &[DATE]);
        assert_eq!(map.preamble(), "some text");
        assert!(!map.are_prefixes_present(&[DATE]));
    }

    #[test]
    fn test_single_marker() {
        let map = tokenize(" d/12-12-2023 ", &[DATE]);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(DATE), Some("12-12-2023"));
    }

    #[test]
    fn test_preamble_and_markers() {
        let map = tokenize("2 t/e c/Food", &[TYPE, TAG]);
        assert_eq!(map.preamble(), "2");
        assert_eq!(map.value(TYPE), Some("e"));
        assert_eq!(map.value(TAG), Some("Food"));
        assert!(map.are_prefixes_present(&[TYPE, TAG]));
    }

    #[test]
    fn test_repeated_marker_keeps_order() {
        let map = tokenize("c/Food c/Transport c/Housing", &[TAG]);
        assert_eq!(map.value(TAG), Some("Food"));
        assert_eq!(map.all_values(TAG), ["Food", "Transport", "Housing"]);
    }

    #[test]
    fn test_marker_must_follow_whitespace() {
        let map = tokenize("t/e abc/def", &[TYPE, TAG]);
        assert_eq!(map.value(TYPE), Some("e abc/def"));
        assert_eq!(map.value(TAG), None);
    }

    #[test]
    fn test_unrecognized_marker_is_value_text() {
        let map = tokenize("d/12-12-2023 x/oops", &[DATE]);
        assert_eq!(map.value(DATE), Some("12-12-2023 x/oops"));
    }

    #[test]
    fn test_empty_value() {
        let map = tokenize("d/", &[DATE]);
        assert_eq!(map.value(DATE), Some(""));
    }

    #[test]
    fn test_value_with_multibyte_text() {
        let map = tokenize("t/e c/Food d/café ☕", &[TYPE, TAG, DATE]);
        assert_eq!(map.value(DATE), Some("café ☕"));
    }
}
