//! Device - hardware installed in a room
//!
//! Devices start active and can only transition to inactive; a deactivated
//! device stays in the system so its sensors and actuators remain listable.

use serde::{Deserialize, Serialize};

use crate::value_objects::{DeviceId, DeviceModel, DeviceName, DeviceStatus, RoomId};

/// A device owned by a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: DeviceName,
    pub model: DeviceModel,
    pub status: DeviceStatus,
    pub room_id: RoomId,
}

impl Device {
    /// Create an active device with a fresh identity
    #[must_use]
    pub fn new(name: DeviceName, model: DeviceModel, room_id: RoomId) -> Self {
        Self {
            id: DeviceId::new(),
            name,
            model,
            status: DeviceStatus::default(),
            room_id,
        }
    }

    /// Rehydrate a device with a known identity and status
    #[must_use]
    pub const fn with_id(
        id: DeviceId,
        name: DeviceName,
        model: DeviceModel,
        status: DeviceStatus,
        room_id: RoomId,
    ) -> Self {
        Self {
            id,
            name,
            model,
            status,
            room_id,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Transition active -> inactive
    ///
    /// Returns `true` when a transition happened, `false` when the device
    /// was already inactive.
    pub fn deactivate(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = DeviceStatus::Inactive;
        true
    }
}
