//! Error handling module for the event registry
//!
//! This module defines the application-level error type. Domain guard
//! failures are wrapped as [`Error::Validation`] so callers can still reach
//! the original [`ValidationError`] and its kind.

use thiserror::Error;

use crate::models::ValidationError;

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the event registry
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A domain invariant was violated by caller input
    #[error("{0}")]
    Validation(ValidationError),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a logging error
    pub fn logging<S: Into<String>>(msg: S) -> Self {
        Error::Logging(msg.into())
    }

    /// The underlying validation error, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this error was caused by caller input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Config(_))
    }
}

/// Convert from envconfig::Error to our Error type
impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}
