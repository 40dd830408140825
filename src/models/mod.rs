//! Domain models for the event registry
//!
//! This module contains the three domain entities (events, speakers and
//! venues), the guard functions that enforce their invariants, and the
//! validation error types those guards raise.

pub mod error;
pub mod event;
mod fields;
pub mod guard;
pub mod speaker;
pub mod venue;

// Re-export commonly used types
pub use error::{ValidationError, ValidationErrorKind, ValidationResult};
pub use event::{Event, MIN_DURATION_MINUTES};
pub use speaker::Speaker;
pub use venue::Venue;
