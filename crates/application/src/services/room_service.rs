//! Room service
//!
//! Adding a room requires a configured house; every room is owned by the
//! singleton house.

use std::{fmt, sync::Arc};

use domain::entities::Room;
use domain::factories::RoomFactory;
use domain::value_objects::{RoomDimensions, RoomFloor, RoomId, RoomName};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    ports::{HouseRepository, RoomRepository},
};

/// Service for room management
pub struct RoomService {
    houses: Arc<dyn HouseRepository>,
    rooms: Arc<dyn RoomRepository>,
    factory: Arc<dyn RoomFactory>,
}

impl fmt::Debug for RoomService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomService").finish_non_exhaustive()
    }
}

impl RoomService {
    /// Create a new room service
    #[must_use]
    pub fn new(
        houses: Arc<dyn HouseRepository>,
        rooms: Arc<dyn RoomRepository>,
        factory: Arc<dyn RoomFactory>,
    ) -> Self {
        Self {
            houses,
            rooms,
            factory,
        }
    }

    /// Add a room to the configured house
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::HouseNotConfigured`] when no house
    /// exists; the room store is not touched in that case.
    #[instrument(skip(self, name, floor, dimensions), fields(room_name = %name))]
    pub async fn add_room(
        &self,
        name: RoomName,
        floor: RoomFloor,
        dimensions: RoomDimensions,
    ) -> Result<Room, ApplicationError> {
        let Some(house) = self.houses.get_singleton().await? else {
            return Err(ApplicationError::HouseNotConfigured);
        };

        let room = self.factory.create_room(name, floor, dimensions, house.id);
        self.rooms.save(&room).await?;

        info!(room_id = %room.id, "Room added");
        Ok(room)
    }

    /// All rooms in insertion order
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApplicationError> {
        self.rooms.find_all().await
    }

    /// A room by its identifier
    #[instrument(skip(self))]
    pub async fn get_room(&self, id: &RoomId) -> Result<Option<Room>, ApplicationError> {
        self.rooms.find_by_id(id).await
    }
}
