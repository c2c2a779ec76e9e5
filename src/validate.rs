//! Recursive structural validation.
//!
//! This module provides the [`Validator`], which checks a document without building
//! any value tree. Every operation works on an inclusive byte range of the input:
//!
//! - [`Validator::validate_atom`] checks one token whose bounds are already known
//! - [`Validator::validate_object`] walks `key:value` pairs between `{` and `}`
//! - [`Validator::validate_sequence`] walks elements between `[`/`(` and `]`/`)`
//!
//! Bounds of each member come from [`find_matching_close`]; the object and sequence
//! walkers then call back into `validate_atom`, which recurses into nested containers.
//! Each recursive call covers a strictly smaller range, and container depth is capped
//! by [`ValidatorOptions::max_depth`].
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use relaxed_json::validate;
//!
//! assert!(validate("{'k': (1, 2,), 3: None,}").is_ok());
//! ```
//!
//! The validator can also be driven directly over an already compacted string:
//!
//! ```rust
//! use relaxed_json::{Validator, ValidatorOptions};
//!
//! let options = ValidatorOptions::new();
//! let mut validator = Validator::new("[1,[2,3],'x']", &options);
//! assert!(validator.validate_sequence(0, 12).is_ok());
//! ```

use crate::error::{Error, Result};
use crate::matcher::{self, char_at, is_literal_start, Delimiter, LITERALS};
use crate::options::{RootKind, ValidatorOptions};

/// The structural validator.
///
/// Borrows the text to check and tracks the current container depth.
/// Created via [`Validator::new`].
#[derive(Debug)]
pub struct Validator<'a> {
    input: &'a str,
    max_depth: usize,
    depth: usize,
}

impl<'a> Validator<'a> {
    pub fn new(input: &'a str, options: &ValidatorOptions) -> Self {
        Validator {
            input,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    /// Validates the whole input as one document.
    ///
    /// With [`RootKind::Object`] the text must be one `{...}` object whose opening brace
    /// closes at the last index; with [`RootKind::Any`] it must be exactly one value.
    /// Either way a text that is not a single enclosed unit is reported as an imbalance
    /// at index 0. A numeric root is checked over the whole text, so a malformed number
    /// such as `1.2.3` is a type mismatch rather than an imbalance.
    ///
    /// # Errors
    ///
    /// Returns the first structural error found.
    pub fn validate_document(&mut self, root: RootKind) -> Result<()> {
        let input = self.input;
        let Some(last) = input.len().checked_sub(1) else {
            return Err(Error::imbalance(0, input));
        };

        match root {
            RootKind::Object => {
                if !input.starts_with('{') || !input.ends_with('}') {
                    return Err(Error::imbalance(0, input));
                }
                if matcher::find_matching_close(input, 0)? != last {
                    return Err(Error::imbalance(0, input));
                }
                self.validate_object(0, last)
            }
            RootKind::Any if input.as_bytes()[0].is_ascii_digit() => self.validate_atom(0, last),
            RootKind::Any => {
                let close = matcher::find_matching_close(input, 0)?;
                if close != last {
                    return Err(Error::imbalance(0, input));
                }
                self.validate_atom(0, last)
            }
        }
    }

    /// Finds the close of the token at `start`. See [`find_matching_close`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot start at `start` or is never closed.
    ///
    /// [`find_matching_close`]: crate::find_matching_close
    pub fn find_matching_close(&self, start: usize) -> Result<usize> {
        matcher::find_matching_close(self.input, start)
    }

    /// Confirms that the balanced range `start..=end` holds a well-formed token.
    ///
    /// Numbers must match `digits[.digits]` over the whole range, literals must be
    /// `True`/`False`/`None`, strings and containers must open and close with a
    /// matching pair. Containers are then checked member by member.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] for a malformed number or literal
    /// - [`Error::Imbalance`] when the first and last characters do not pair up
    /// - any error raised while checking a nested container
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::{Validator, ValidatorOptions, ErrorKind};
    ///
    /// let options = ValidatorOptions::new();
    /// let mut validator = Validator::new("123.45.6", &options);
    /// let err = validator.validate_atom(0, 7).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    /// ```
    pub fn validate_atom(&mut self, start: usize, end: usize) -> Result<()> {
        let input = self.input;
        let fragment = self.range(start, end)?;
        let lead = fragment.as_bytes()[0];

        if lead.is_ascii_digit() {
            if !matcher::is_number(fragment) {
                return Err(Error::type_mismatch(start, fragment, "Number"));
            }
            return Ok(());
        }

        if is_literal_start(lead) {
            if !LITERALS.contains(&fragment) {
                return Err(Error::type_mismatch(start, fragment, "bool"));
            }
            return Ok(());
        }

        let Some(delimiter) = Delimiter::from_open(lead) else {
            return Err(Error::syntax(start, char_at(input, start)));
        };
        if start == end || input.as_bytes()[end] != delimiter.close() {
            return Err(Error::imbalance(start, fragment));
        }

        match delimiter {
            Delimiter::Brace => self.validate_object(start, end),
            Delimiter::Bracket | Delimiter::Paren => self.validate_sequence(start, end),
            Delimiter::DoubleQuote | Delimiter::SingleQuote => Ok(()),
        }
    }

    /// Validates the object spanning `start..=end`.
    ///
    /// Keys may be any token, including numbers and nested containers. A trailing comma
    /// before `}` is accepted, as is the empty object.
    ///
    /// # Errors
    ///
    /// - [`Error::Format`] when `:` does not follow a key or `,` does not follow a value
    /// - [`Error::Syntax`] when a value starts with `:`, `,` or `.`
    /// - [`Error::DepthLimitExceeded`] when nesting is too deep
    /// - any error raised by a key or value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::{Validator, ValidatorOptions, Error};
    ///
    /// let options = ValidatorOptions::new();
    /// let s = r#"{"k1"1,"k2":"abc"}"#;
    /// let mut validator = Validator::new(s, &options);
    /// assert_eq!(validator.validate_object(0, s.len() - 1), Err(Error::format(5, '1', ':')));
    /// ```
    pub fn validate_object(&mut self, start: usize, end: usize) -> Result<()> {
        self.expect_container(start, end, Delimiter::Brace)?;
        self.enter(start)?;
        log::trace!("validating object at {}..={}", start, end);
        let result = self.object_members(start, end);
        self.depth -= 1;
        result
    }

    /// Validates the list or tuple spanning `start..=end`.
    ///
    /// # Errors
    ///
    /// - [`Error::Format`] when `,` does not separate two elements
    /// - [`Error::DepthLimitExceeded`] when nesting is too deep
    /// - any error raised by an element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::{Validator, ValidatorOptions, Error};
    ///
    /// let options = ValidatorOptions::new();
    /// let mut validator = Validator::new("[1,2,36]", &options);
    /// assert!(validator.validate_sequence(0, 7).is_ok());
    ///
    /// let mut validator = Validator::new("[1,2,'3'6]", &options);
    /// assert_eq!(validator.validate_sequence(0, 9), Err(Error::format(8, '6', ',')));
    /// ```
    pub fn validate_sequence(&mut self, start: usize, end: usize) -> Result<()> {
        let open = self.input.as_bytes().get(start).copied();
        let delimiter = match open.and_then(Delimiter::from_open) {
            Some(d @ (Delimiter::Bracket | Delimiter::Paren)) => d,
            _ => Delimiter::Bracket,
        };
        self.expect_container(start, end, delimiter)?;
        self.enter(start)?;
        log::trace!("validating sequence at {}..={}", start, end);
        let result = self.sequence_elements(start, end);
        self.depth -= 1;
        result
    }

    fn object_members(&mut self, start: usize, end: usize) -> Result<()> {
        let input = self.input;
        let bytes = input.as_bytes();
        let mut cursor = start + 1;

        while cursor < end {
            let key_end = self.member_close(cursor, end)?;
            self.validate_atom(cursor, key_end)?;
            cursor = key_end + 1;

            if bytes[cursor] != b':' {
                return Err(Error::format(cursor, char_at(input, cursor), ':'));
            }
            cursor += 1;

            if matches!(bytes[cursor], b':' | b',' | b'.') {
                return Err(Error::syntax(cursor, char_at(input, cursor)));
            }
            let value_end = self.member_close(cursor, end)?;
            self.validate_atom(cursor, value_end)?;
            cursor = value_end + 1;

            if cursor == end {
                break;
            }
            if bytes[cursor] != b',' {
                return Err(Error::format(cursor, char_at(input, cursor), ','));
            }
            cursor += 1;
        }

        Ok(())
    }

    fn sequence_elements(&mut self, start: usize, end: usize) -> Result<()> {
        let input = self.input;
        let bytes = input.as_bytes();
        let mut cursor = start + 1;

        while cursor < end {
            let element_end = self.member_close(cursor, end)?;
            self.validate_atom(cursor, element_end)?;
            cursor = element_end + 1;

            if cursor == end {
                break;
            }
            if bytes[cursor] != b',' {
                return Err(Error::format(cursor, char_at(input, cursor), ','));
            }
            cursor += 1;
        }

        Ok(())
    }

    /// Close of the member at `start`, which must lie inside the container ending at `end`.
    fn member_close(&self, start: usize, end: usize) -> Result<usize> {
        let close = self.find_matching_close(start)?;
        if close >= end {
            return Err(Error::imbalance(start, &self.input[start..=end]));
        }
        Ok(close)
    }

    fn expect_container(&self, start: usize, end: usize, delimiter: Delimiter) -> Result<()> {
        let fragment = self.range(start, end)?;
        let bytes = fragment.as_bytes();
        if bytes[0] != delimiter.open() {
            return Err(Error::format(
                start,
                char_at(self.input, start),
                char::from(delimiter.open()),
            ));
        }
        if bytes.len() < 2 || bytes[bytes.len() - 1] != delimiter.close() {
            return Err(Error::imbalance(start, fragment));
        }
        Ok(())
    }

    fn enter(&mut self, index: usize) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::depth_limit(index, self.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    /// The non-empty text of `start..=end`, or an imbalance error if the range is unusable.
    fn range(&self, start: usize, end: usize) -> Result<&'a str> {
        let input = self.input;
        if start > end {
            return Err(Error::imbalance(start, input.get(start..).unwrap_or("")));
        }
        input
            .get(start..=end)
            .ok_or_else(|| Error::imbalance(start, input.get(start..).unwrap_or("")))
    }
}
