//! In-memory actuator store

use application::{error::ApplicationError, ports::ActuatorRepository};
use async_trait::async_trait;
use domain::entities::Actuator;
use domain::value_objects::ActuatorId;
use parking_lot::RwLock;
use tracing::instrument;

/// Vec-backed actuator store preserving insertion order
#[derive(Debug, Default)]
pub struct InMemoryActuatorStore {
    actuators: RwLock<Vec<Actuator>>,
}

impl InMemoryActuatorStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActuatorRepository for InMemoryActuatorStore {
    #[instrument(skip(self, actuator), fields(actuator_id = %actuator.id))]
    async fn save(&self, actuator: &Actuator) -> Result<(), ApplicationError> {
        let mut actuators = self.actuators.write();
        if actuators.iter().any(|a| a.id == actuator.id) {
            return Err(ApplicationError::Persistence(format!(
                "actuator {} is already stored",
                actuator.id
            )));
        }
        actuators.push(actuator.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Actuator>, ApplicationError> {
        Ok(self.actuators.read().clone())
    }

    async fn find_by_id(&self, id: &ActuatorId) -> Result<Option<Actuator>, ApplicationError> {
        Ok(self.actuators.read().iter().find(|a| a.id == *id).cloned())
    }

    async fn exists(&self, id: &ActuatorId) -> Result<bool, ApplicationError> {
        Ok(self.actuators.read().iter().any(|a| a.id == *id))
    }
}
