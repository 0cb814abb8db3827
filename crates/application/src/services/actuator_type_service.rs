//! Actuator type catalog service

use std::{fmt, sync::Arc};

use domain::entities::ActuatorType;
use domain::value_objects::ActuatorTypeId;
use tracing::instrument;

use crate::{error::ApplicationError, ports::ActuatorTypeRepository};

/// Read-only access to the actuator type catalog
pub struct ActuatorTypeService {
    actuator_types: Arc<dyn ActuatorTypeRepository>,
}

impl fmt::Debug for ActuatorTypeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActuatorTypeService").finish_non_exhaustive()
    }
}

impl ActuatorTypeService {
    /// Create a new actuator type service
    #[must_use]
    pub fn new(actuator_types: Arc<dyn ActuatorTypeRepository>) -> Self {
        Self { actuator_types }
    }

    /// All registered actuator types in registration order
    #[instrument(skip(self))]
    pub async fn list_types(&self) -> Result<Vec<ActuatorType>, ApplicationError> {
        self.actuator_types.find_all().await
    }

    /// Whether a type is registered
    #[instrument(skip(self))]
    pub async fn type_exists(&self, id: ActuatorTypeId) -> Result<bool, ApplicationError> {
        self.actuator_types.exists(id).await
    }
}
