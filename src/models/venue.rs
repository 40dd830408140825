//! Venue entity
//!
//! A named, addressed location with a fixed capacity. Venues compare by
//! `venue_id` alone. A single shared default venue ("Online Event") is used
//! by events that were never placed anywhere else.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use super::error::ValidationResult;
use super::fields::{CoalescedText, OptionalText};
use super::guard::{reject_blank, reject_non_positive};

static DEFAULT_VENUE: OnceLock<Arc<Venue>> = OnceLock::new();

/// A location where events take place
#[derive(Debug, Clone, Serialize)]
pub struct Venue {
    venue_id: i32,
    name: String,
    address: String,
    capacity: i32,
    description: OptionalText,
    parking_info: CoalescedText,
}

impl Venue {
    /// Id of the shared default venue
    pub const DEFAULT_ID: i32 = 1;
    /// Name of the shared default venue
    pub const DEFAULT_NAME: &'static str = "Online Event";
    /// Address of the shared default venue
    pub const DEFAULT_ADDRESS: &'static str = "Virtual";
    /// Capacity of the shared default venue
    pub const DEFAULT_CAPACITY: i32 = 1000;

    /// Create a venue, validating every required field
    ///
    /// Name and address are trimmed. Fails with `OutOfRange` for a
    /// non-positive id or capacity, `NullArgument` for a missing name or
    /// address and `InvalidArgument` for a blank one.
    pub fn new<'a>(
        venue_id: i32,
        name: impl Into<Option<&'a str>>,
        address: impl Into<Option<&'a str>>,
        capacity: i32,
    ) -> ValidationResult<Self> {
        let venue_id = reject_non_positive(venue_id, "venue_id")?;
        let name = reject_blank(name.into(), "name", "Name")?;
        let address = reject_blank(address.into(), "address", "Address")?;
        let capacity = reject_non_positive(capacity, "capacity")?;

        Ok(Self {
            venue_id,
            name,
            address,
            capacity,
            description: OptionalText::default(),
            parking_info: CoalescedText::default(),
        })
    }

    /// The process-wide default venue
    ///
    /// Every call returns a handle to the same instance.
    pub fn default_venue() -> Arc<Venue> {
        DEFAULT_VENUE
            .get_or_init(|| {
                tracing::debug!(venue_id = Self::DEFAULT_ID, "Default venue initialized");
                Arc::new(Venue {
                    venue_id: Self::DEFAULT_ID,
                    name: Self::DEFAULT_NAME.to_string(),
                    address: Self::DEFAULT_ADDRESS.to_string(),
                    capacity: Self::DEFAULT_CAPACITY,
                    description: OptionalText::default(),
                    parking_info: CoalescedText::default(),
                })
            })
            .clone()
    }

    pub fn venue_id(&self) -> i32 {
        self.venue_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.get()
    }

    /// Set the description; blank or missing text clears it
    pub fn set_description<'a>(&mut self, description: impl Into<Option<&'a str>>) {
        self.description.assign(description.into());
    }

    /// Parking information, never missing (`""` when unset)
    pub fn parking_info(&self) -> &str {
        self.parking_info.get()
    }

    /// Set parking information. `None` is stored as `""`; blank text is kept as given.
    pub fn set_parking_info<'a>(&mut self, parking_info: impl Into<Option<&'a str>>) {
        self.parking_info.assign(parking_info.into());
    }
}

impl PartialEq for Venue {
    fn eq(&self, other: &Self) -> bool {
        self.venue_id == other.venue_id
    }
}

impl Eq for Venue {}

impl Hash for Venue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.venue_id.hash(state);
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Venue [Id: {}, Name: {}, Capacity: {}]",
            self.venue_id, self.name, self.capacity
        )
    }
}
