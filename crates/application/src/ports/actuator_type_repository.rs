//! Actuator type catalog port

use async_trait::async_trait;
use domain::entities::ActuatorType;
use domain::value_objects::ActuatorTypeId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the actuator type catalog
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ActuatorTypeRepository: Send + Sync {
    /// Register a catalog entry
    async fn save(&self, actuator_type: &ActuatorType) -> Result<(), ApplicationError>;

    /// All registered types in registration order
    async fn find_all(&self) -> Result<Vec<ActuatorType>, ApplicationError>;

    /// Whether this type is registered
    async fn exists(&self, id: ActuatorTypeId) -> Result<bool, ApplicationError>;
}
