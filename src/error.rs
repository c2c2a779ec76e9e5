//! Error types for relaxed JSON validation.
//!
//! Validation stops at the first structural problem it finds. The returned [`Error`]
//! carries the byte index of the fault in the validated (whitespace-normalized) text
//! together with the offending character or substring, so the fault can be located
//! without scanning the input again.
//!
//! ## Error Categories
//!
//! - **Format**: an expected fixed character (`:`, `,`) is missing
//! - **Syntax**: a value position starts with a character that cannot begin a value
//! - **Type mismatch**: a span that looks like a number or literal is malformed
//! - **Imbalance**: opening and closing delimiters (brackets or quotes) do not pair up
//! - **Depth limit**: containers are nested deeper than the configured maximum
//! - **I/O and UTF-8**: the input could not be read as text
//!
//! ## Examples
//!
//! ```rust
//! use relaxed_json::{validate, ErrorKind};
//!
//! let err = validate(r#"{"response":,"answerId":530}"#).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Syntax);
//! assert_eq!(err.index(), Some(12));
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Represents every way validation of a relaxed JSON document can fail.
///
/// Indices are byte offsets into the text that was validated. When whitespace
/// normalization is enabled that is the compacted text; use
/// [`Normalized::original_offset`](crate::Normalized::original_offset) to map back.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Error {
    /// A fixed character such as `:` or `,` was expected but something else was found
    #[error("Expected \"{expected}\" at index {index}; got {found}")]
    Format {
        index: usize,
        found: char,
        expected: char,
    },

    /// The character at a value position cannot start any value
    #[error("Expected a value at index {index}; got {found}")]
    Syntax { index: usize, found: char },

    /// A span resembling one type does not match that type's full lexical form
    #[error("{fragment} contains an invalid substring; this string should begin with a {expected}")]
    TypeMismatch {
        index: usize,
        fragment: String,
        expected: String,
    },

    /// Opening and closing delimiters do not balance within the input
    #[error("{fragment} is an invalid substring; it doesn't have balanced opening and closing characters")]
    Imbalance { index: usize, fragment: String },

    /// Containers nest deeper than the configured limit
    #[error("Nesting depth exceeds the limit of {limit} at index {index}")]
    DepthLimitExceeded { index: usize, limit: usize },

    /// IO error while reading the input
    #[error("IO error: {message}")]
    Io { message: String },

    /// The input bytes are not valid UTF-8
    #[error("Invalid UTF-8: {message}")]
    Utf8 { message: String },
}

/// The category of an [`Error`], without its positional payload.
///
/// Handy for matching in tests and for summarizing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Format,
    Syntax,
    TypeMismatch,
    Imbalance,
    DepthLimitExceeded,
    Io,
    Utf8,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Format => "format",
            ErrorKind::Syntax => "syntax",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::Imbalance => "imbalance",
            ErrorKind::DepthLimitExceeded => "depth limit exceeded",
            ErrorKind::Io => "io",
            ErrorKind::Utf8 => "utf-8",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Creates a format error: `expected` was required at `index` but `found` was there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::Error;
    ///
    /// let err = Error::format(5, '1', ':');
    /// assert_eq!(err.to_string(), "Expected \":\" at index 5; got 1");
    /// ```
    pub fn format(index: usize, found: char, expected: char) -> Self {
        Error::Format {
            index,
            found,
            expected,
        }
    }

    /// Creates a syntax error for a character that cannot begin a value.
    pub fn syntax(index: usize, found: char) -> Self {
        Error::Syntax { index, found }
    }

    /// Creates a type mismatch error for a malformed span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::Error;
    ///
    /// let err = Error::type_mismatch(0, "123.45.6", "Number");
    /// assert!(err.to_string().starts_with("123.45.6 contains an invalid substring"));
    /// ```
    pub fn type_mismatch(index: usize, fragment: &str, expected: &str) -> Self {
        Error::TypeMismatch {
            index,
            fragment: fragment.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates an imbalance error for a span whose delimiters do not pair up.
    pub fn imbalance(index: usize, fragment: &str) -> Self {
        Error::Imbalance {
            index,
            fragment: fragment.to_string(),
        }
    }

    /// Creates an error for nesting deeper than `limit`.
    pub fn depth_limit(index: usize, limit: usize) -> Self {
        Error::DepthLimitExceeded { index, limit }
    }

    /// Creates an I/O error for failures while reading input.
    pub fn io(msg: &str) -> Self {
        Error::Io {
            message: msg.to_string(),
        }
    }

    /// Creates an error for input that is not UTF-8 text.
    pub fn utf8(msg: &str) -> Self {
        Error::Utf8 {
            message: msg.to_string(),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format { .. } => ErrorKind::Format,
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Imbalance { .. } => ErrorKind::Imbalance,
            Error::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            Error::Io { .. } => ErrorKind::Io,
            Error::Utf8 { .. } => ErrorKind::Utf8,
        }
    }

    /// Returns the byte index of the fault, if the error is positional.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::Format { index, .. }
            | Error::Syntax { index, .. }
            | Error::TypeMismatch { index, .. }
            | Error::Imbalance { index, .. }
            | Error::DepthLimitExceeded { index, .. } => Some(*index),
            Error::Io { .. } | Error::Utf8 { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::format(18, '[', ',').to_string(),
            "Expected \",\" at index 18; got ["
        );
        assert_eq!(
            Error::syntax(12, ',').to_string(),
            "Expected a value at index 12; got ,"
        );
        assert!(Error::imbalance(0, "'abc")
            .to_string()
            .contains("doesn't have balanced opening and closing characters"));
        assert!(Error::depth_limit(3, 2).to_string().contains("limit of 2"));
    }

    #[test]
    fn test_kind_and_index() {
        let err = Error::type_mismatch(4, "1.2.3", "Number");
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.index(), Some(4));
        assert_eq!(Error::io("closed").index(), None);
        assert_eq!(ErrorKind::DepthLimitExceeded.to_string(), "depth limit exceeded");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Error::format(5, '1', ':')).unwrap();
        assert_eq!(json["kind"], "format");
        assert_eq!(json["index"], 5);
        assert_eq!(json["expected"], ":");
    }
}
