//! In-memory room store

use application::{error::ApplicationError, ports::RoomRepository};
use async_trait::async_trait;
use domain::entities::Room;
use domain::value_objects::RoomId;
use parking_lot::RwLock;
use tracing::instrument;

/// Vec-backed room store preserving insertion order
#[derive(Debug, Default)]
pub struct InMemoryRoomStore {
    rooms: RwLock<Vec<Room>>,
}

impl InMemoryRoomStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomStore {
    #[instrument(skip(self, room), fields(room_id = %room.id))]
    async fn save(&self, room: &Room) -> Result<(), ApplicationError> {
        let mut rooms = self.rooms.write();
        if rooms.iter().any(|r| r.id == room.id) {
            return Err(ApplicationError::Persistence(format!(
                "room {} is already stored",
                room.id
            )));
        }
        rooms.push(room.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Room>, ApplicationError> {
        Ok(self.rooms.read().clone())
    }

    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, ApplicationError> {
        Ok(self.rooms.read().iter().find(|r| r.id == *id).cloned())
    }

    async fn exists(&self, id: &RoomId) -> Result<bool, ApplicationError> {
        Ok(self.rooms.read().iter().any(|r| r.id == *id))
    }
}
