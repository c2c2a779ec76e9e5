//! # relaxed_json
//!
//! A structural validator for a relaxed, Python-flavoured JSON dialect.
//!
//! ## What is the dialect?
//!
//! Standard JSON plus the things people write when they paste a Python `repr` or hand-edit
//! a config file:
//!
//! - **Trailing commas**: `{"a": 1,}` and `[1, 2,]`
//! - **Python literals**: `True`, `False`, `None` (the lowercase JSON spellings are rejected)
//! - **Tuples**: `(1, 2)` is a sequence just like `[1, 2]`
//! - **Any key**: `{5: "b"}`, `{'k': 1}`, even `{(1, 2): "pair"}`
//! - **Single-quoted strings**: `'text'`
//!
//! See the [`dialect`] module for the full grammar.
//!
//! ## What does validation produce?
//!
//! Only a verdict. No value tree is built: the validator matches delimiters and walks
//! index ranges of the input, and on the first structural problem it stops with an
//! [`Error`] naming the offending index and character.
//!
//! ## Quick Start
//!
//! ```rust
//! use relaxed_json::{validate, Error};
//!
//! let doc = r#"{
//!     "name": "John",
//!     "age": 30,
//!     "married": True,
//!     "children": ("Ann", "Billy"),
//!     "pets": None,
//!     "cars": [
//!         {"model": "BMW 230", "mpg": 27.5},
//!         {"model": "Ford Edge", "mpg": 24.1},
//!     ],
//! }"#;
//! assert!(validate(doc).is_ok());
//!
//! let err = validate(r#"{"response":,"answerId":530}"#).unwrap_err();
//! assert_eq!(err, Error::syntax(12, ','));
//! ```
//!
//! ## Whitespace
//!
//! All whitespace is stripped before validation, including whitespace inside quotes, so
//! error indices refer to the compacted text. [`check_document`] maps them back to a line
//! and column of the original input.
//!
//! ## Performance Characteristics
//!
//! - **Matching**: each delimiter scan is linear in the span it covers
//! - **Memory**: no allocation on the success path beyond the normalized copy
//! - **Recursion**: bounded by [`ValidatorOptions::max_depth`]
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Deep nesting fails with [`Error::DepthLimitExceeded`] instead of exhausting the stack
//! - Validation is a pure function of the input; separate inputs may be checked on
//!   separate threads without coordination

pub mod dialect;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod options;
pub mod report;
pub mod validate;

pub use error::{Error, ErrorKind, Result};
pub use matcher::find_matching_close;
pub use normalize::{normalize, Location, Normalized};
pub use options::{RootKind, ValidatorOptions};
pub use report::{check_document, Report};
pub use validate::Validator;

use std::io;

/// Validate a relaxed JSON document with default options.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::validate;
///
/// assert!(validate("{5: 'b', 'list': [1, 2,],}").is_ok());
/// assert!(validate("{\"flag\": true}").is_err());
/// ```
///
/// # Errors
///
/// Returns the first structural error in the document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn validate(input: &str) -> Result<()> {
    validate_with_options(input, &ValidatorOptions::default())
}

/// Validate a relaxed JSON document with custom options.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::{validate_with_options, ValidatorOptions};
///
/// let options = ValidatorOptions::lenient();
/// assert!(validate_with_options("(1, 'two', None)", &options).is_ok());
/// ```
///
/// # Errors
///
/// Returns the first structural error in the document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn validate_with_options(input: &str, options: &ValidatorOptions) -> Result<()> {
    run_document(input, options).1
}

/// Normalizes (when enabled) and validates `input`, returning the normalized text so
/// callers can map error indices back into the original.
pub(crate) fn run_document(
    input: &str,
    options: &ValidatorOptions,
) -> (Option<Normalized>, Result<()>) {
    let normalized = options.normalize_whitespace.then(|| normalize(input));
    let text = normalized.as_ref().map_or(input, Normalized::as_str);

    log::debug!(
        "validating document ({} bytes, {} after normalization)",
        input.len(),
        text.len()
    );
    let result = Validator::new(text, options).validate_document(options.root);
    match &result {
        Ok(()) => log::debug!("document is valid"),
        Err(err) => log::debug!("document rejected: {}", err),
    }
    (normalized, result)
}

/// Returns true if `input` is a valid document under default options.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::is_valid;
///
/// assert!(is_valid("{}"));
/// assert!(!is_valid("{\"a\":\"b}"));
/// ```
#[must_use]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Validate a document given as UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not UTF-8, otherwise the first structural error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn validate_slice(bytes: &[u8]) -> Result<()> {
    let s = std::str::from_utf8(bytes).map_err(|e| Error::utf8(&e.to_string()))?;
    validate(s)
}

/// Validate a document read in full from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::validate_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"{'a': (1, 2)}");
/// assert!(validate_reader(cursor).is_ok());
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the first structural error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn validate_reader<R>(mut reader: R) -> Result<()>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    validate(&string)
}

/// Check that the balanced range `start..=end` of `input` holds a well-formed token.
///
/// See [`Validator::validate_atom`].
///
/// # Examples
///
/// ```rust
/// use relaxed_json::{validate_atom, Error};
///
/// assert!(validate_atom("123.456", 0, 6).is_ok());
/// assert_eq!(
///     validate_atom("123.45.6", 0, 7),
///     Err(Error::type_mismatch(0, "123.45.6", "Number"))
/// );
/// ```
///
/// # Errors
///
/// Returns the first structural error inside the range.
pub fn validate_atom(input: &str, start: usize, end: usize) -> Result<()> {
    Validator::new(input, &ValidatorOptions::default()).validate_atom(start, end)
}

/// Check the object spanning `start..=end` of `input`.
///
/// See [`Validator::validate_object`].
///
/// # Errors
///
/// Returns the first structural error inside the object.
pub fn validate_object(input: &str, start: usize, end: usize) -> Result<()> {
    Validator::new(input, &ValidatorOptions::default()).validate_object(start, end)
}

/// Check the list or tuple spanning `start..=end` of `input`.
///
/// See [`Validator::validate_sequence`].
///
/// # Errors
///
/// Returns the first structural error inside the sequence.
pub fn validate_sequence(input: &str, start: usize, end: usize) -> Result<()> {
    Validator::new(input, &ValidatorOptions::default()).validate_sequence(start, end)
}
