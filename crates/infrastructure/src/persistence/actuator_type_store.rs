//! In-memory actuator type catalog

use application::{error::ApplicationError, ports::ActuatorTypeRepository};
use async_trait::async_trait;
use domain::entities::ActuatorType;
use domain::value_objects::ActuatorTypeId;
use parking_lot::RwLock;

/// Vec-backed actuator type catalog preserving registration order
#[derive(Debug, Default)]
pub struct InMemoryActuatorTypeStore {
    types: RwLock<Vec<ActuatorType>>,
}

impl InMemoryActuatorTypeStore {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActuatorTypeRepository for InMemoryActuatorTypeStore {
    async fn save(&self, actuator_type: &ActuatorType) -> Result<(), ApplicationError> {
        let mut types = self.types.write();
        if types.iter().any(|t| t.id == actuator_type.id) {
            return Err(ApplicationError::Persistence(format!(
                "actuator type {} is already registered",
                actuator_type.id
            )));
        }
        types.push(*actuator_type);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ActuatorType>, ApplicationError> {
        Ok(self.types.read().clone())
    }

    async fn exists(&self, id: ActuatorTypeId) -> Result<bool, ApplicationError> {
        Ok(self.types.read().iter().any(|t| t.id == id))
    }
}
