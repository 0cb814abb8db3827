//! Actuator - a controllable unit attached to a device
//!
//! Construction is the settings checkpoint: the settings shape must match
//! what the actuator type declares, so a range actuator can never exist
//! without its limits.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{ActuatorId, ActuatorName, ActuatorSettings, ActuatorTypeId, DeviceId};

/// An actuator of a known type, owned by a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actuator {
    pub id: ActuatorId,
    pub name: ActuatorName,
    pub actuator_type: ActuatorTypeId,
    pub settings: ActuatorSettings,
    pub device_id: DeviceId,
}

impl Actuator {
    /// Create an actuator with a fresh identity
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SettingsMismatch`] when the settings shape
    /// does not fit the actuator type.
    pub fn new(
        name: ActuatorName,
        actuator_type: ActuatorTypeId,
        settings: ActuatorSettings,
        device_id: DeviceId,
    ) -> Result<Self, DomainError> {
        if !actuator_type.accepts(&settings) {
            return Err(DomainError::SettingsMismatch {
                actuator_type: actuator_type.as_str().to_string(),
            });
        }
        Ok(Self {
            id: ActuatorId::new(),
            name,
            actuator_type,
            settings,
            device_id,
        })
    }

    /// Rehydrate an actuator with a known identity
    ///
    /// # Errors
    ///
    /// Same settings check as [`Actuator::new`]; stored data that fails it
    /// is corrupt and must not rehydrate.
    pub fn with_id(
        id: ActuatorId,
        name: ActuatorName,
        actuator_type: ActuatorTypeId,
        settings: ActuatorSettings,
        device_id: DeviceId,
    ) -> Result<Self, DomainError> {
        if !actuator_type.accepts(&settings) {
            return Err(DomainError::SettingsMismatch {
                actuator_type: actuator_type.as_str().to_string(),
            });
        }
        Ok(Self {
            id,
            name,
            actuator_type,
            settings,
            device_id,
        })
    }
}
