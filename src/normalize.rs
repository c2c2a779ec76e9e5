//! Whitespace normalization.
//!
//! The dialect ignores whitespace everywhere, including inside quoted strings, so
//! validation runs over a compacted copy of the input. [`Normalized`] remembers where
//! each kept run of text came from, which lets error indices be reported against the
//! original input.

use serde::Serialize;
use std::sync::OnceLock;

use regex::Regex;

fn whitespace_pattern() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// A 1-based line and column inside the original input.
///
/// Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Computes the location of byte `offset` within `text`.
    ///
    /// Offsets past the end of `text` resolve to the position just after its last character.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::Location;
    ///
    /// let loc = Location::of_offset("{\n  \"a\": 1\n}", 4);
    /// assert_eq!((loc.line, loc.column), (2, 3));
    /// ```
    #[must_use]
    pub fn of_offset(text: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (pos, ch) in text.char_indices() {
            if pos >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Location { line, column }
    }
}

/// Input text with all whitespace removed, plus a map back to original offsets.
#[derive(Clone, Debug)]
pub struct Normalized {
    text: String,
    // (compact offset, original offset) at the start of every kept run
    runs: Vec<(usize, usize)>,
}

impl Normalized {
    /// The compacted text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the normalized view, returning the compacted text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Maps a byte offset in the compacted text to the matching offset in the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::normalize;
    ///
    /// let normalized = normalize("{ \"a\" : 1 }");
    /// assert_eq!(normalized.as_str(), "{\"a\":1}");
    /// assert_eq!(normalized.original_offset(4), 6);
    /// ```
    #[must_use]
    pub fn original_offset(&self, compact: usize) -> usize {
        let idx = self.runs.partition_point(|&(start, _)| start <= compact);
        match idx.checked_sub(1).and_then(|i| self.runs.get(i)) {
            Some(&(start, original)) => original + (compact - start),
            None => compact,
        }
    }

    /// Locates a compacted byte offset as a line and column of `original`.
    #[must_use]
    pub fn location(&self, original: &str, compact: usize) -> Location {
        Location::of_offset(original, self.original_offset(compact))
    }
}

/// Strips every whitespace character from `input`.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::normalize;
///
/// assert_eq!(normalize("{\n  \"k\": [1, 2]\n}").as_str(), "{\"k\":[1,2]}");
/// ```
#[must_use]
pub fn normalize(input: &str) -> Normalized {
    let mut text = String::with_capacity(input.len());
    let mut runs = Vec::new();
    let mut last = 0;

    for m in whitespace_pattern().find_iter(input) {
        if m.start() > last {
            runs.push((text.len(), last));
            text.push_str(&input[last..m.start()]);
        }
        last = m.end();
    }
    if last < input.len() {
        runs.push((text.len(), last));
        text.push_str(&input[last..]);
    }

    Normalized { text, runs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_all_whitespace() {
        let normalized = normalize(" {\t\"a b\" :\r\n True } ");
        assert_eq!(normalized.as_str(), "{\"ab\":True}");
    }

    #[test]
    fn test_no_whitespace_is_identity() {
        let normalized = normalize("{\"a\":1}");
        assert_eq!(normalized.as_str(), "{\"a\":1}");
        for i in 0..7 {
            assert_eq!(normalized.original_offset(i), i);
        }
    }

    #[test]
    fn test_offsets_map_back() {
        let original = "{\n  \"a\": ,\n}";
        let normalized = normalize(original);
        assert_eq!(normalized.as_str(), "{\"a\":,}");
        // the comma
        assert_eq!(normalized.original_offset(5), 9);
        let loc = normalized.location(original, 5);
        assert_eq!((loc.line, loc.column), (2, 8));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(normalize("").as_str(), "");
        assert_eq!(normalize(" \n\t ").as_str(), "");
        assert_eq!(normalize(" \n").original_offset(0), 0);
    }

    #[test]
    fn test_location_counts_characters() {
        let loc = Location::of_offset("é{", 2);
        assert_eq!((loc.line, loc.column), (1, 2));
    }
}
