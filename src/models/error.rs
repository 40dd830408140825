//! Validation error types for the domain entities
//!
//! Every guard failure carries the kind of violation, the offending field
//! and an optional human readable context message.

use std::fmt;
use thiserror::Error;

/// Error raised when a guard rejects an argument
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The kind of validation error
    pub kind: ValidationErrorKind,
    /// The field (or parameter) that failed validation
    pub field: String,
    /// Optional additional context
    pub context: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            context: None,
        }
    }

    /// Create a validation error with additional context
    pub fn with_context(
        kind: ValidationErrorKind,
        field: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            context: Some(context.into()),
        }
    }

    /// Add context to an existing error
    pub fn add_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Shorthand for `NullArgument` with the standard message
    pub fn null_argument(field: impl Into<String>) -> Self {
        let field = field.into();
        let context = format!("{} cannot be null.", field);
        Self::with_context(ValidationErrorKind::NullArgument, field, context)
    }

    /// Shorthand for `InvalidArgument`
    pub fn invalid_argument(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::with_context(ValidationErrorKind::InvalidArgument, field, context)
    }

    /// Shorthand for `OutOfRange` with the standard message
    pub fn out_of_range(field: impl Into<String>) -> Self {
        let field = field.into();
        let context = format!("{} must be greater than zero.", field);
        Self::with_context(ValidationErrorKind::OutOfRange, field, context)
    }

    /// Shorthand for `DuplicateEntry`
    pub fn duplicate_entry(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::with_context(ValidationErrorKind::DuplicateEntry, field, context)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(ctx) => write!(
                f,
                "Validation failed for field '{}': {} - {}",
                self.field, self.kind, ctx
            ),
            None => write!(
                f,
                "Validation failed for field '{}': {}",
                self.field, self.kind
            ),
        }
    }
}

/// Specific validation error types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required reference was missing
    #[error("Required argument is missing")]
    NullArgument,

    /// Value present but semantically invalid (blank text, past date, short duration, bad email)
    #[error("Invalid argument")]
    InvalidArgument,

    /// Numeric value must be strictly positive
    #[error("Value is out of range")]
    OutOfRange,

    /// Entry already present in a unique collection
    #[error("Duplicate entry")]
    DuplicateEntry,
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convert validation errors to application errors
impl From<ValidationError> for crate::error::Error {
    fn from(err: ValidationError) -> Self {
        crate::error::Error::Validation(err)
    }
}
