//! In-memory device store

use application::{error::ApplicationError, ports::DeviceRepository};
use async_trait::async_trait;
use domain::entities::Device;
use domain::value_objects::{DeviceId, RoomId};
use parking_lot::RwLock;
use tracing::instrument;

/// Vec-backed device store preserving insertion order
#[derive(Debug, Default)]
pub struct InMemoryDeviceStore {
    devices: RwLock<Vec<Device>>,
}

impl InMemoryDeviceStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeviceRepository for InMemoryDeviceStore {
    #[instrument(skip(self, device), fields(device_id = %device.id))]
    async fn save(&self, device: &Device) -> Result<(), ApplicationError> {
        let mut devices = self.devices.write();
        if devices.iter().any(|d| d.id == device.id) {
            return Err(ApplicationError::Persistence(format!(
                "device {} is already stored",
                device.id
            )));
        }
        devices.push(device.clone());
        Ok(())
    }

    #[instrument(skip(self, device), fields(device_id = %device.id))]
    async fn update(&self, device: &Device) -> Result<bool, ApplicationError> {
        let mut devices = self.devices.write();
        match devices.iter_mut().find(|d| d.id == device.id) {
            Some(stored) => {
                *stored = device.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_all(&self) -> Result<Vec<Device>, ApplicationError> {
        Ok(self.devices.read().clone())
    }

    async fn find_by_id(&self, id: &DeviceId) -> Result<Option<Device>, ApplicationError> {
        Ok(self.devices.read().iter().find(|d| d.id == *id).cloned())
    }

    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Device>, ApplicationError> {
        Ok(self
            .devices
            .read()
            .iter()
            .filter(|d| d.room_id == *room_id)
            .cloned()
            .collect())
    }

    async fn exists(&self, id: &DeviceId) -> Result<bool, ApplicationError> {
        Ok(self.devices.read().iter().any(|d| d.id == *id))
    }
}

#[cfg(test)]
mod tests {
    use domain::value_objects::{DeviceModel, DeviceName};

    use super::*;

    fn device(name: &str, room_id: RoomId) -> Device {
        Device::new(
            DeviceName::new(name).unwrap(),
            DeviceModel::new("M-1").unwrap(),
            room_id,
        )
    }

    #[tokio::test]
    async fn find_by_room_filters_and_keeps_order() {
        let store = InMemoryDeviceStore::new();
        let room_a = RoomId::new();
        let room_b = RoomId::new();

        store.save(&device("A1", room_a)).await.unwrap();
        store.save(&device("B1", room_b)).await.unwrap();
        store.save(&device("A2", room_a)).await.unwrap();

        let names: Vec<String> = store
            .find_by_room(&room_a)
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name.as_str().to_string())
            .collect();

        assert_eq!(names, ["A1", "A2"]);
    }

    #[tokio::test]
    async fn update_overwrites_matching_identity() {
        let store = InMemoryDeviceStore::new();
        let mut device = device("Meter", RoomId::new());
        store.save(&device).await.unwrap();

        device.deactivate();
        assert!(store.update(&device).await.unwrap());

        let stored = store.find_by_id(&device.id).await.unwrap().unwrap();
        assert!(!stored.is_active());
    }

    #[tokio::test]
    async fn update_unknown_device_refuses() {
        let store = InMemoryDeviceStore::new();
        assert!(!store.update(&device("Ghost", RoomId::new())).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_save_is_rejected() {
        let store = InMemoryDeviceStore::new();
        let device = device("Meter", RoomId::new());
        store.save(&device).await.unwrap();

        assert!(store.save(&device).await.is_err());
    }
}
