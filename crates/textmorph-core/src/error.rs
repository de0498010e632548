//! Error types for the Textmorph core library
//!
//! Two failure kinds exist at the transform contract boundary:
//! [`Error::InvalidInput`] when a strategy rejects its input, and
//! [`Error::TransformationFailure`] when a strategy fails while transforming
//! input it accepted. The original cause of a transformation failure is kept
//! as a [`TransformError`] source so callers can still tell, for example, a
//! missing response field apart from a malformed one.

use thiserror::Error;

/// Fixed message carried by [`Error::InvalidInput`]
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input data";

/// Main error type for Textmorph operations
#[derive(Error, Debug)]
pub enum Error {
    /// The strategy's validation predicate rejected the input
    #[error("{message}")]
    InvalidInput {
        message: String,
        /// Name of the strategy that rejected the input
        strategy: String,
    },

    /// The strategy failed while transforming accepted input
    #[error("Error occurred during transformation: {source}")]
    TransformationFailure {
        strategy: String,
        #[source]
        source: TransformError,
    },

    /// Configuration errors (LLM endpoint, credentials, model)
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// HTTP/Network related errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Unknown strategy name or unsupported operation
    #[error("Unsupported operation: {message}")]
    Unsupported {
        message: String,
        feature: Option<String>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised inside a strategy's `transform` step
#[derive(Error, Debug)]
pub enum TransformError {
    /// A structured response did not carry a required field
    #[error("'{field}' not found in the response.")]
    MissingField { field: String },

    /// A structured response carried a field with an unusable value
    #[error("'{field}' has an invalid value: {reason}")]
    InvalidField { field: String, reason: String },

    /// Anything else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TransformError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }
}

impl Error {
    /// Create an invalid input error for the named strategy
    pub fn invalid_input(strategy: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: INVALID_INPUT_MESSAGE.to_string(),
            strategy: strategy.into(),
        }
    }

    /// Wrap a transform failure for the named strategy
    pub fn transformation(strategy: impl Into<String>, source: TransformError) -> Self {
        Self::TransformationFailure {
            strategy: strategy.into(),
            source,
        }
    }

    /// Create a configuration error without a source
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error is an input rejection
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Whether this error wraps a missing response field
    pub fn is_missing_field(&self) -> bool {
        matches!(
            self,
            Self::TransformationFailure {
                source: TransformError::MissingField { .. },
                ..
            }
        )
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Configuration {
            message: format!("Invalid base URL: {}", err),
            source: Some(anyhow::Error::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("binary");
        assert_eq!(err.to_string(), "Invalid input data");
        assert!(err.is_invalid_input());
        assert!(!err.is_missing_field());
    }

    #[test]
    fn test_transformation_failure_embeds_cause() {
        let err = Error::transformation("acrostic-poem", TransformError::missing_field("sentences"));
        assert_eq!(
            err.to_string(),
            "Error occurred during transformation: 'sentences' not found in the response."
        );
        assert!(err.is_missing_field());
    }

    #[test]
    fn test_other_is_transparent() {
        let err = TransformError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "boom");
    }
}
