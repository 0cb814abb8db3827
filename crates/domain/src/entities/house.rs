//! House - the root of the smart-home model
//!
//! The system holds exactly one house; the singleton invariant lives in the
//! house repository port, not here.

use serde::{Deserialize, Serialize};

use crate::value_objects::{HouseId, Location};

/// The managed house: an identity and a configurable location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    pub location: Location,
}

impl House {
    /// Create a house with a fresh identity at the given location
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self {
            id: HouseId::new(),
            location,
        }
    }

    /// Rehydrate a house with a known identity
    #[must_use]
    pub const fn with_id(id: HouseId, location: Location) -> Self {
        Self { id, location }
    }

    /// Replace the house's location
    pub fn configure_location(&mut self, location: Location) {
        self.location = location;
    }
}
