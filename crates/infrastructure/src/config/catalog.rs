//! Sensor/actuator type catalog configuration
//!
//! Selects which of the known types are enabled in this installation.
//! Defaults to the full closed set; unknown names fail resolution, they are
//! never silently skipped.

use application::error::ApplicationError;
use domain::value_objects::{ActuatorTypeId, SensorTypeId};
use serde::{Deserialize, Serialize};

/// Catalog configuration: enabled type names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Enabled sensor type names
    #[serde(default = "default_sensor_types")]
    pub sensor_types: Vec<String>,

    /// Enabled actuator type names
    #[serde(default = "default_actuator_types")]
    pub actuator_types: Vec<String>,
}

fn default_sensor_types() -> Vec<String> {
    SensorTypeId::ALL
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

fn default_actuator_types() -> Vec<String> {
    ActuatorTypeId::ALL
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sensor_types: default_sensor_types(),
            actuator_types: default_actuator_types(),
        }
    }
}

impl CatalogConfig {
    /// Resolve the configured names against the closed type sets
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] naming the first unknown
    /// type.
    pub fn resolve(&self) -> Result<(Vec<SensorTypeId>, Vec<ActuatorTypeId>), ApplicationError> {
        let sensors = self
            .sensor_types
            .iter()
            .map(|name| {
                name.parse::<SensorTypeId>().map_err(|_| {
                    ApplicationError::Configuration(format!("unknown sensor type: {name}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let actuators = self
            .actuator_types
            .iter()
            .map(|name| {
                name.parse::<ActuatorTypeId>().map_err(|_| {
                    ApplicationError::Configuration(format!("unknown actuator type: {name}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((sensors, actuators))
    }
}
