//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from textmorph-core library
    #[error("{0}")]
    Core(#[from] textmorph_core::Error),

    /// Strategy name not in the catalog
    #[error("Unknown strategy '{}'", name)]
    UnknownStrategy { name: String },

    /// `check` found that the strategy rejects the input
    #[error("Strategy '{}' rejects the input", strategy)]
    InputRejected { strategy: String },

    /// Config file with an unsupported extension
    #[error("Invalid file format for {}: expected {} format", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(core) => match core {
                textmorph_core::Error::InvalidInput { .. } => 2,
                textmorph_core::Error::TransformationFailure { .. } => 3,
                textmorph_core::Error::Configuration { .. } => 5,
                textmorph_core::Error::Http { .. } => 10,
                _ => 2,
            },
            Self::UnknownStrategy { .. } => 4,
            Self::InputRejected { .. } => 2,
            Self::InvalidFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_) | Self::UnknownStrategy { .. })
    }
}

/// Format an error for display to the user
///
/// Causes are appended on indented `caused by:` lines.
pub fn format_error(error: &Error, use_color: bool) -> String {
    let mut output = if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    };

    let mut source = std::error::Error::source(error);
    // Core errors display their own message, so skip the duplicate first link
    if let Error::Core(core) = error {
        source = std::error::Error::source(core);
    }
    while let Some(cause) = source {
        output.push_str(&format!("\n  caused by: {}", cause));
        source = std::error::Error::source(cause);
    }

    if let Error::UnknownStrategy { .. } = error {
        output.push_str("\n\nRun 'textmorph list' to see the available strategies");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_failures() {
        let invalid: Error = textmorph_core::Error::invalid_input("binary").into();
        assert_eq!(invalid.exit_code(), 2);

        let failed: Error = textmorph_core::Error::transformation(
            "acrostic-poem",
            textmorph_core::TransformError::missing_field("sentences"),
        )
        .into();
        assert_eq!(failed.exit_code(), 3);

        assert_eq!(Error::UnknownStrategy { name: "rot13".into() }.exit_code(), 4);
        assert_eq!(Error::other("x").exit_code(), 99);
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::config("missing key");
        assert_eq!(format_error(&err, false), "Error: Configuration error: missing key");
    }

    #[test]
    fn test_format_error_includes_cause() {
        let err: Error = textmorph_core::Error::transformation(
            "acrostic-poem",
            textmorph_core::TransformError::missing_field("sentences"),
        )
        .into();
        let formatted = format_error(&err, false);
        assert!(formatted.starts_with(
            "Error: Error occurred during transformation: 'sentences' not found in the response."
        ));
        assert!(formatted.contains("caused by: 'sentences' not found in the response."));
    }

    #[test]
    fn test_unknown_strategy_hints_at_list() {
        let err = Error::UnknownStrategy { name: "rot13".into() };
        assert!(err.should_show_help());
        assert!(format_error(&err, false).contains("textmorph list"));
    }
}
