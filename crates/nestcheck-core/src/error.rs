//! Error types for the nestcheck core library
//!
//! Rule violations are not errors: they are reported as data through
//! [`crate::ValidationReport`]. The types here cover loading records and
//! configuring the rule engine.
//!
//! Copyright (c) 2025 Nestcheck Team
//! Licensed under the Apache-2.0 license

use crate::loader::LoaderError;
use thiserror::Error;

/// Main error type for nestcheck operations
#[derive(Error, Debug)]
pub enum Error {
    /// Record file could not be loaded
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// Invalid rule configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<M: Into<String>>(message: M) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for nestcheck operations
pub type Result<T> = std::result::Result<T, Error>;
