//! Sensor - a measuring unit attached to a device

use serde::{Deserialize, Serialize};

use crate::value_objects::{DeviceId, SensorId, SensorName, SensorTypeId};

/// A sensor of a known type, owned by a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    pub name: SensorName,
    pub sensor_type: SensorTypeId,
    pub device_id: DeviceId,
}

impl Sensor {
    /// Create a sensor with a fresh identity
    #[must_use]
    pub fn new(name: SensorName, sensor_type: SensorTypeId, device_id: DeviceId) -> Self {
        Self {
            id: SensorId::new(),
            name,
            sensor_type,
            device_id,
        }
    }

    /// Rehydrate a sensor with a known identity
    #[must_use]
    pub const fn with_id(
        id: SensorId,
        name: SensorName,
        sensor_type: SensorTypeId,
        device_id: DeviceId,
    ) -> Self {
        Self {
            id,
            name,
            sensor_type,
            device_id,
        }
    }

    /// The unit this sensor reports in, resolved from its type
    #[must_use]
    pub const fn unit(&self) -> crate::value_objects::MeasurementUnit {
        self.sensor_type.unit()
    }
}
