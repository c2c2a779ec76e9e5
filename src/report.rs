//! Validation reports.
//!
//! A [`Report`] is the outcome of checking one document, with the failure (if any)
//! located as a line and column of the text the caller passed in. Reports serialize
//! with serde, which is how the command-line tool emits `--json` output.

use serde::Serialize;

use crate::error::Error;
use crate::normalize::Location;
use crate::options::ValidatorOptions;

/// The outcome of validating one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
    /// Where the error sits in the original, un-normalized text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Report {
    fn valid() -> Self {
        Report {
            valid: true,
            error: None,
            location: None,
        }
    }

    fn invalid(error: Error, location: Option<Location>) -> Self {
        Report {
            valid: false,
            error: Some(error),
            location,
        }
    }

    /// Converts the report back into a plain result.
    ///
    /// # Errors
    ///
    /// Returns the recorded error when the document was invalid.
    pub fn into_result(self) -> crate::Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Validates `input` and locates any failure in the original text.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::{check_document, ValidatorOptions};
///
/// let text = "{\n  \"response\": ,\n  \"answerId\": 530\n}";
/// let report = check_document(text, &ValidatorOptions::new());
/// assert!(!report.valid);
/// let location = report.location.unwrap();
/// assert_eq!((location.line, location.column), (2, 15));
/// ```
#[must_use]
pub fn check_document(input: &str, options: &ValidatorOptions) -> Report {
    match crate::run_document(input, options) {
        (_, Ok(())) => Report::valid(),
        (normalized, Err(error)) => {
            let location = error.index().map(|i| match &normalized {
                Some(normalized) => normalized.location(input, i),
                None => Location::of_offset(input, i),
            });
            Report::invalid(error, location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_valid_report() {
        let report = check_document("{ 'a' : [ 1 , 2 ] }", &ValidatorOptions::new());
        assert_eq!(report, Report::valid());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_location_without_normalization() {
        let options = ValidatorOptions::new().with_whitespace_normalization(false);
        let report = check_document("{\"a\": 1}", &options);
        let error = report.error.clone().unwrap();
        assert_eq!(error, Error::syntax(5, ' '));
        let location = report.location.unwrap();
        assert_eq!((location.line, location.column), (1, 6));
    }

    #[test]
    fn test_report_serializes() {
        let report = check_document("{\"a\":1,,}", &ValidatorOptions::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["error"]["kind"], "syntax");
        assert_eq!(json["error"]["index"], 7);
        assert_eq!(json["location"]["column"], 8);

        let json = serde_json::to_value(Report::valid()).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true }));
    }

    #[test]
    fn test_matches_validate_with_options() {
        let keep = ValidatorOptions::new().with_whitespace_normalization(false);
        for options in [ValidatorOptions::new(), ValidatorOptions::lenient(), keep] {
            for doc in ["{'a': 1}", "{\"a\": 1,,}", "{}{}", "1.2.3", "(None,)", ""] {
                let report = check_document(doc, &options);
                assert_eq!(report.valid, report.error.is_none());
                assert_eq!(report.into_result(), crate::validate_with_options(doc, &options));
            }
        }
    }

    #[test]
    fn test_into_result() {
        let report = check_document("[]", &ValidatorOptions::new());
        assert_eq!(report.into_result().unwrap_err().kind(), ErrorKind::Imbalance);
    }
}
