//! Event Registry Library
//!
//! Domain entities for managing events, their speakers and their venues.
//! Every entity validates its required fields on construction and normalizes
//! its optional fields on every write.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{Event, Speaker, ValidationError, ValidationErrorKind, ValidationResult, Venue};
