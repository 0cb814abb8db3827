//! Device storage port

use async_trait::async_trait;
use domain::entities::Device;
use domain::value_objects::{DeviceId, RoomId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for device persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// Store a new device
    async fn save(&self, device: &Device) -> Result<(), ApplicationError>;

    /// Overwrite a stored device with the same identity
    ///
    /// Returns `false` when no device with that identity is stored.
    async fn update(&self, device: &Device) -> Result<bool, ApplicationError>;

    /// All devices in insertion order
    async fn find_all(&self) -> Result<Vec<Device>, ApplicationError>;

    /// A device by its identifier
    async fn find_by_id(&self, id: &DeviceId) -> Result<Option<Device>, ApplicationError>;

    /// Devices owned by a room, in insertion order
    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Device>, ApplicationError>;

    /// Whether a device with this identifier is stored
    async fn exists(&self, id: &DeviceId) -> Result<bool, ApplicationError>;
}
