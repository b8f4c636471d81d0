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

    /// Error from nestcheck-core library
    #[error("{0}")]
    Core(#[from] nestcheck_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The record was validated and at least one rule failed
    #[error("Validation failed with {count} violation(s)")]
    ValidationFailed { count: usize },

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

impl From<nestcheck_core::LoaderError> for Error {
    fn from(error: nestcheck_core::LoaderError) -> Self {
        Self::Core(error.into())
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
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
            Self::ValidationFailed { .. } => 2,
            Self::FileNotFound { .. } => 3,
            Self::Core(_) => 4,
            Self::Config(_) => 5,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Whether the report already told the user everything
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::ValidationFailed { count: 3 }.exit_code(), 2);
        assert_eq!(Error::FileNotFound { path: PathBuf::from("x") }.exit_code(), 3);
        assert_eq!(Error::config("bad").exit_code(), 5);
        assert_eq!(Error::other("boom").exit_code(), 99);
    }

    #[test]
    fn test_format_error_plain() {
        let message = format_error(&Error::ValidationFailed { count: 2 }, false);
        assert_eq!(message, "Error: Validation failed with 2 violation(s)");
    }

    #[test]
    fn test_loader_error_maps_to_core() {
        let loader = nestcheck_core::LoaderError::unsupported_format(PathBuf::from("task.txt"));
        let error = Error::from(loader);
        assert!(matches!(error, Error::Core(_)));
        assert!(error.to_string().contains("task.txt"));
    }
}
