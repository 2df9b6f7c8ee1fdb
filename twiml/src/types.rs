//! Error types for the TwiML library
//!
//! Validation failures come in two tiers. Structural errors (an empty
//! response, a child whose type is not allowed where it was placed) stop the
//! check of the container they occur in. Semantic errors (a verb with a bad
//! attribute or missing content) are collected so that a caller sees every
//! problem in one pass.

use std::fmt;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, TwimlError>;

/// Banner printed before the list of failures in a [`ValidationError`]
pub const VALIDATION_BANNER: &str = "Invalid TwiML markup:";

/// Errors that can occur while encoding markup or decoding callbacks
#[derive(Debug, thiserror::Error)]
pub enum TwimlError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to write TwiML document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode TwiML document: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to decode form payload: {0}")]
    Form(#[from] serde_urlencoded::de::Error),

    #[error("Failed to decode JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TwiML document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl TwimlError {
    /// The validation failures, if this error came from validation
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            TwimlError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("cannot encode an empty response")]
    EmptyResponse,

    #[error("unknown markup type {child} as child of {parent}")]
    UnknownChild {
        parent: &'static str,
        child: &'static str,
    },

    #[error("{element}: {field} is required")]
    MissingValue {
        element: &'static str,
        field: &'static str,
    },

    #[error("{element}: invalid {attribute} \"{value}\" (expected {expected})")]
    InvalidValue {
        element: &'static str,
        attribute: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{element}: {}", join_messages(.errors, "; "))]
    Nested {
        element: &'static str,
        errors: Vec<MarkupError>,
    },
}

impl MarkupError {
    /// True for failures that make the whole container unusable
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            MarkupError::EmptyResponse | MarkupError::UnknownChild { .. }
        )
    }

    pub(crate) fn missing(element: &'static str, field: &'static str) -> Self {
        MarkupError::MissingValue { element, field }
    }

    pub(crate) fn invalid(
        element: &'static str,
        attribute: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        MarkupError::InvalidValue {
            element,
            attribute,
            value: value.into(),
            expected,
        }
    }
}

/// Aggregate of one or more validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<MarkupError>,
}

impl ValidationError {
    /// Wrap a list of failures. An empty list still produces an error value;
    /// use [`ValidationError::check`] to turn a list into a `Result`.
    pub fn new(errors: Vec<MarkupError>) -> Self {
        Self { errors }
    }

    /// Error holding exactly one failure
    pub fn single(error: MarkupError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// `Ok` when nothing was collected, otherwise the aggregate
    pub fn check(errors: Vec<MarkupError>) -> std::result::Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }

    pub fn errors(&self) -> &[MarkupError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<MarkupError> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True if any top-level failure is structural (empty container or a
    /// child type that is not allowed there)
    pub fn is_structural(&self) -> bool {
        self.errors.iter().any(MarkupError::is_structural)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", VALIDATION_BANNER)?;
        for error in &self.errors {
            write!(f, "\n{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn join_messages(errors: &[MarkupError], separator: &str) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(vec![
            MarkupError::missing("Say", "text"),
            MarkupError::invalid("Reject", "reason", "maybe", "rejected or busy"),
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid TwiML markup:\nSay: text is required\nReject: invalid reason \"maybe\" (expected rejected or busy)"
        );
        assert_eq!(err.len(), 2);
        assert!(!err.is_structural());
    }

    #[test]
    fn test_nested_error_display() {
        let err = MarkupError::Nested {
            element: "Dial",
            errors: vec![
                MarkupError::UnknownChild {
                    parent: "Dial",
                    child: "Say",
                },
                MarkupError::missing("Number", "number"),
            ],
        };

        assert_eq!(
            err.to_string(),
            "Dial: unknown markup type Say as child of Dial; Number: number is required"
        );
        // Nested failures are semantic from the parent's point of view
        assert!(!err.is_structural());
    }

    #[test]
    fn test_check() {
        assert!(ValidationError::check(Vec::new()).is_ok());

        let err = ValidationError::check(vec![MarkupError::EmptyResponse]).unwrap_err();
        assert!(err.is_structural());
        assert!(err.to_string().contains("cannot encode an empty response"));
    }
}
