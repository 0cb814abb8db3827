//! Room - a named space inside the house

use serde::{Deserialize, Serialize};

use crate::value_objects::{HouseId, RoomDimensions, RoomFloor, RoomId, RoomName};

/// A room owned by the house, immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: RoomName,
    pub floor: RoomFloor,
    pub dimensions: RoomDimensions,
    pub house_id: HouseId,
}

impl Room {
    /// Create a room with a fresh identity
    #[must_use]
    pub fn new(
        name: RoomName,
        floor: RoomFloor,
        dimensions: RoomDimensions,
        house_id: HouseId,
    ) -> Self {
        Self {
            id: RoomId::new(),
            name,
            floor,
            dimensions,
            house_id,
        }
    }

    /// Rehydrate a room with a known identity
    #[must_use]
    pub const fn with_id(
        id: RoomId,
        name: RoomName,
        floor: RoomFloor,
        dimensions: RoomDimensions,
        house_id: HouseId,
    ) -> Self {
        Self {
            id,
            name,
            floor,
            dimensions,
            house_id,
        }
    }
}
