//! Sensor type catalog port
//!
//! Holds the read-only reference data registered at startup from
//! configuration.

use async_trait::async_trait;
use domain::entities::SensorType;
use domain::value_objects::SensorTypeId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the sensor type catalog
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SensorTypeRepository: Send + Sync {
    /// Register a catalog entry
    async fn save(&self, sensor_type: &SensorType) -> Result<(), ApplicationError>;

    /// All registered types in registration order
    async fn find_all(&self) -> Result<Vec<SensorType>, ApplicationError>;

    /// Whether this type is registered
    async fn exists(&self, id: SensorTypeId) -> Result<bool, ApplicationError>;
}
