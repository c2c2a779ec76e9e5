//! Delimiter matching.
//!
//! [`find_matching_close`] answers one question: given the index where a token starts,
//! where does that token end? The scan is purely structural. Only delimiters of the
//! same kind as the opener are counted, so `{"a": "}"}` closes at the first `}` and the
//! content checks in [`crate::validate`] are what reject it.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// The literal spellings of the dialect's boolean and null values.
pub const LITERALS: [&str; 3] = ["True", "False", "None"];

fn number_prefix() -> &'static Regex {
    static NUMBER_PREFIX: OnceLock<Regex> = OnceLock::new();
    NUMBER_PREFIX.get_or_init(|| Regex::new(r"^[0-9]+\.?[0-9]*").expect("number pattern is valid"))
}

fn number_exact() -> &'static Regex {
    static NUMBER_EXACT: OnceLock<Regex> = OnceLock::new();
    NUMBER_EXACT.get_or_init(|| Regex::new(r"^[0-9]+\.?[0-9]*$").expect("number pattern is valid"))
}

/// Returns true if `text` is a complete dialect number (`12`, `12.`, `12.5`).
///
/// # Examples
///
/// ```rust
/// use relaxed_json::matcher::is_number;
///
/// assert!(is_number("27.5"));
/// assert!(!is_number("123.45.6"));
/// assert!(!is_number("-1"));
/// ```
#[must_use]
pub fn is_number(text: &str) -> bool {
    number_exact().is_match(text)
}

/// Opening delimiters and the character that closes each of them.
///
/// Quotes close with themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Brace,
    Bracket,
    Paren,
    DoubleQuote,
    SingleQuote,
}

impl Delimiter {
    /// Classifies an opening byte.
    #[must_use]
    pub const fn from_open(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Delimiter::Brace),
            b'[' => Some(Delimiter::Bracket),
            b'(' => Some(Delimiter::Paren),
            b'"' => Some(Delimiter::DoubleQuote),
            b'\'' => Some(Delimiter::SingleQuote),
            _ => None,
        }
    }

    #[must_use]
    pub const fn open(self) -> u8 {
        match self {
            Delimiter::Brace => b'{',
            Delimiter::Bracket => b'[',
            Delimiter::Paren => b'(',
            Delimiter::DoubleQuote => b'"',
            Delimiter::SingleQuote => b'\'',
        }
    }

    #[must_use]
    pub const fn close(self) -> u8 {
        match self {
            Delimiter::Brace => b'}',
            Delimiter::Bracket => b']',
            Delimiter::Paren => b')',
            Delimiter::DoubleQuote => b'"',
            Delimiter::SingleQuote => b'\'',
        }
    }

    #[must_use]
    pub const fn is_quote(self) -> bool {
        matches!(self, Delimiter::DoubleQuote | Delimiter::SingleQuote)
    }
}

/// Returns true if `byte` can start a literal keyword.
#[must_use]
pub const fn is_literal_start(byte: u8) -> bool {
    matches!(byte, b'T' | b'F' | b'N')
}

/// The character starting at byte `index`, or `'\0'` past the end.
pub(crate) fn char_at(input: &str, index: usize) -> char {
    input
        .get(index..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or('\0')
}

/// Finds the index of the character that closes the token starting at `start`.
///
/// - a digit: the last character of the longest `digits[.digits]` run
/// - `T`, `F`, `N`: the last character of `True`, `False` or `None`
/// - `"` or `'`: the next identical quote (no escapes)
/// - `{`, `[`, `(`: the close where same-kind depth returns to zero
///
/// # Errors
///
/// - [`Error::Syntax`] if `input[start]` cannot begin a token
/// - [`Error::TypeMismatch`] if a `T`/`F`/`N` run is not a known literal
/// - [`Error::Imbalance`] if a quote or bracket is never closed
///
/// # Examples
///
/// ```rust
/// use relaxed_json::find_matching_close;
///
/// assert_eq!(find_matching_close("[[[[123,456]]]]", 0).unwrap(), 14);
/// assert_eq!(find_matching_close("[[[[123,456],7,8]]]", 2).unwrap(), 16);
/// assert_eq!(find_matching_close("44.0123,55,5]]", 0).unwrap(), 6);
/// assert!(find_matching_close("'asdasd", 0).is_err());
/// ```
pub fn find_matching_close(input: &str, start: usize) -> Result<usize> {
    let bytes = input.as_bytes();
    let Some(&lead) = bytes.get(start) else {
        return Err(Error::syntax(start, '\0'));
    };

    if lead.is_ascii_digit() {
        return match number_prefix().find(&input[start..]) {
            Some(m) => Ok(start + m.end() - 1),
            None => Err(Error::type_mismatch(start, &input[start..], "Number")),
        };
    }

    if is_literal_start(lead) {
        let rest = &input[start..];
        return LITERALS
            .iter()
            .find(|word| rest.starts_with(*word))
            .map(|word| start + word.len() - 1)
            .ok_or_else(|| Error::type_mismatch(start, rest, "bool"));
    }

    let Some(delimiter) = Delimiter::from_open(lead) else {
        return Err(Error::syntax(start, char_at(input, start)));
    };

    if delimiter.is_quote() {
        return bytes[start + 1..]
            .iter()
            .position(|&b| b == lead)
            .map(|offset| start + 1 + offset)
            .ok_or_else(|| Error::imbalance(start, &input[start..]));
    }

    let close = delimiter.close();
    let mut depth: usize = 1;
    for (offset, &b) in bytes[start + 1..].iter().enumerate() {
        let pos = start + 1 + offset;
        if b == lead {
            depth += 1;
        } else if b == close {
            depth = depth
                .checked_sub(1)
                .ok_or_else(|| Error::imbalance(start, &input[start..=pos]))?;
            if depth == 0 {
                return Ok(pos);
            }
        }
    }

    Err(Error::imbalance(start, &input[start..]))
}
