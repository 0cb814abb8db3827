//! Room storage port

use async_trait::async_trait;
use domain::entities::Room;
use domain::value_objects::RoomId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for room persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Store a new room
    async fn save(&self, room: &Room) -> Result<(), ApplicationError>;

    /// All rooms in insertion order
    async fn find_all(&self) -> Result<Vec<Room>, ApplicationError>;

    /// A room by its identifier
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, ApplicationError>;

    /// Whether a room with this identifier is stored
    async fn exists(&self, id: &RoomId) -> Result<bool, ApplicationError>;
}
