//! Configuration options for relaxed JSON validation.
//!
//! This module provides types to customize how a document is checked:
//!
//! - [`ValidatorOptions`]: Main configuration struct
//! - [`RootKind`]: Which values may appear at the top level of a document
//!
//! ## Examples
//!
//! ```rust
//! use relaxed_json::{validate_with_options, RootKind, ValidatorOptions};
//!
//! // Accept a bare sequence as the whole document
//! let options = ValidatorOptions::new().with_root(RootKind::Any);
//! assert!(validate_with_options("[1, 2, (3, 4)]", &options).is_ok());
//!
//! // Refuse anything nested deeper than two containers
//! let options = ValidatorOptions::new().with_max_depth(2);
//! assert!(validate_with_options("{\"a\": [[1]]}", &options).is_err());
//! ```

/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Which values a document may consist of.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::RootKind;
///
/// assert_eq!(RootKind::default(), RootKind::Object);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RootKind {
    /// The document must be a single `{...}` object
    #[default]
    Object,
    /// The document may be any single value spanning the whole input
    Any,
}

/// Configuration options for relaxed JSON validation.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::{RootKind, ValidatorOptions};
///
/// // Default: object root, whitespace stripped, depth limit 128
/// let options = ValidatorOptions::new();
///
/// // Any value may be the root
/// let options = ValidatorOptions::lenient();
///
/// // Custom configuration
/// let options = ValidatorOptions::new()
///     .with_max_depth(16)
///     .with_whitespace_normalization(false)
///     .with_root(RootKind::Any);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorOptions {
    pub max_depth: usize,
    pub normalize_whitespace: bool,
    pub root: RootKind,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        ValidatorOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            normalize_whitespace: true,
            root: RootKind::default(),
        }
    }
}

impl ValidatorOptions {
    /// Creates default options (object root, whitespace stripped, depth limit 128).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::ValidatorOptions;
    ///
    /// let options = ValidatorOptions::new();
    /// assert_eq!(options.max_depth, 128);
    /// assert!(options.normalize_whitespace);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options requiring the document to be an object. Same as [`ValidatorOptions::new`].
    #[must_use]
    pub fn strict_root() -> Self {
        Self::default()
    }

    /// Options accepting any single value as the document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::{RootKind, ValidatorOptions};
    ///
    /// assert_eq!(ValidatorOptions::lenient().root, RootKind::Any);
    /// ```
    #[must_use]
    pub fn lenient() -> Self {
        ValidatorOptions {
            root: RootKind::Any,
            ..Default::default()
        }
    }

    /// Sets the maximum container nesting depth.
    ///
    /// A document nested deeper fails with
    /// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables or disables whitespace stripping before validation.
    ///
    /// With normalization disabled any whitespace in the input is reported as an error.
    #[must_use]
    pub fn with_whitespace_normalization(mut self, enabled: bool) -> Self {
        self.normalize_whitespace = enabled;
        self
    }

    /// Sets which values may form the document root.
    #[must_use]
    pub fn with_root(mut self, root: RootKind) -> Self {
        self.root = root;
        self
    }
}
