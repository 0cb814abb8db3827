//! Actuator service
//!
//! Mirrors the sensor service: the device must exist and be active, the
//! type must be registered, and the settings shape is checked by actuator
//! construction.

use std::{fmt, sync::Arc};

use domain::entities::Actuator;
use domain::factories::ActuatorFactory;
use domain::value_objects::{ActuatorName, ActuatorSettings, ActuatorTypeId, DeviceId};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    ports::{ActuatorRepository, ActuatorTypeRepository, DeviceRepository},
};

/// Service for actuator management
pub struct ActuatorService {
    devices: Arc<dyn DeviceRepository>,
    actuator_types: Arc<dyn ActuatorTypeRepository>,
    actuators: Arc<dyn ActuatorRepository>,
    factory: Arc<dyn ActuatorFactory>,
}

impl fmt::Debug for ActuatorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActuatorService").finish_non_exhaustive()
    }
}

impl ActuatorService {
    /// Create a new actuator service
    #[must_use]
    pub fn new(
        devices: Arc<dyn DeviceRepository>,
        actuator_types: Arc<dyn ActuatorTypeRepository>,
        actuators: Arc<dyn ActuatorRepository>,
        factory: Arc<dyn ActuatorFactory>,
    ) -> Self {
        Self {
            devices,
            actuator_types,
            actuators,
            factory,
        }
    }

    /// Attach an actuator to a device
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] for an unknown device,
    /// [`ApplicationError::DeviceInactive`] for a deactivated one,
    /// [`ApplicationError::UnregisteredType`] for a type missing from the
    /// catalog, and a domain error when the settings shape does not match
    /// the type.
    #[instrument(skip(self, name, settings), fields(actuator_name = %name, %actuator_type))]
    pub async fn add_actuator(
        &self,
        name: ActuatorName,
        actuator_type: ActuatorTypeId,
        settings: ActuatorSettings,
        device_id: DeviceId,
    ) -> Result<Actuator, ApplicationError> {
        let Some(device) = self.devices.find_by_id(&device_id).await? else {
            return Err(ApplicationError::not_found("device", device_id));
        };
        if !device.is_active() {
            return Err(ApplicationError::DeviceInactive(device_id.to_string()));
        }
        if !self.actuator_types.exists(actuator_type).await? {
            return Err(ApplicationError::UnregisteredType(
                actuator_type.as_str().to_string(),
            ));
        }

        let actuator = self
            .factory
            .create_actuator(name, actuator_type, settings, device_id)?;
        self.actuators.save(&actuator).await?;

        info!(actuator_id = %actuator.id, "Actuator added");
        Ok(actuator)
    }

    /// All actuators in insertion order
    #[instrument(skip(self))]
    pub async fn list_actuators(&self) -> Result<Vec<Actuator>, ApplicationError> {
        self.actuators.find_all().await
    }
}
