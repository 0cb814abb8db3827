//! Sensor service
//!
//! A sensor can only be attached to an existing, active device, and only
//! for a type registered in the catalog.

use std::{fmt, sync::Arc};

use domain::entities::Sensor;
use domain::factories::SensorFactory;
use domain::value_objects::{DeviceId, SensorName, SensorTypeId};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    ports::{DeviceRepository, SensorRepository, SensorTypeRepository},
};

/// Service for sensor management
pub struct SensorService {
    devices: Arc<dyn DeviceRepository>,
    sensor_types: Arc<dyn SensorTypeRepository>,
    sensors: Arc<dyn SensorRepository>,
    factory: Arc<dyn SensorFactory>,
}

impl fmt::Debug for SensorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorService").finish_non_exhaustive()
    }
}

impl SensorService {
    /// Create a new sensor service
    #[must_use]
    pub fn new(
        devices: Arc<dyn DeviceRepository>,
        sensor_types: Arc<dyn SensorTypeRepository>,
        sensors: Arc<dyn SensorRepository>,
        factory: Arc<dyn SensorFactory>,
    ) -> Self {
        Self {
            devices,
            sensor_types,
            sensors,
            factory,
        }
    }

    /// Attach a sensor to a device
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] for an unknown device,
    /// [`ApplicationError::DeviceInactive`] for a deactivated one, and
    /// [`ApplicationError::UnregisteredType`] when the type is not in the
    /// catalog.
    #[instrument(skip(self, name), fields(sensor_name = %name, %sensor_type))]
    pub async fn add_sensor(
        &self,
        name: SensorName,
        sensor_type: SensorTypeId,
        device_id: DeviceId,
    ) -> Result<Sensor, ApplicationError> {
        let Some(device) = self.devices.find_by_id(&device_id).await? else {
            return Err(ApplicationError::not_found("device", device_id));
        };
        if !device.is_active() {
            return Err(ApplicationError::DeviceInactive(device_id.to_string()));
        }
        if !self.sensor_types.exists(sensor_type).await? {
            return Err(ApplicationError::UnregisteredType(
                sensor_type.as_str().to_string(),
            ));
        }

        let sensor = self.factory.create_sensor(name, sensor_type, device_id);
        self.sensors.save(&sensor).await?;

        info!(sensor_id = %sensor.id, "Sensor added");
        Ok(sensor)
    }

    /// All sensors in insertion order
    #[instrument(skip(self))]
    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, ApplicationError> {
        self.sensors.find_all().await
    }
}
