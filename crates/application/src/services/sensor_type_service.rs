//! Sensor type catalog service

use std::{fmt, sync::Arc};

use domain::entities::SensorType;
use domain::value_objects::SensorTypeId;
use tracing::instrument;

use crate::{error::ApplicationError, ports::SensorTypeRepository};

/// Read-only access to the sensor type catalog
pub struct SensorTypeService {
    sensor_types: Arc<dyn SensorTypeRepository>,
}

impl fmt::Debug for SensorTypeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorTypeService").finish_non_exhaustive()
    }
}

impl SensorTypeService {
    /// Create a new sensor type service
    #[must_use]
    pub fn new(sensor_types: Arc<dyn SensorTypeRepository>) -> Self {
        Self { sensor_types }
    }

    /// All registered sensor types in registration order
    #[instrument(skip(self))]
    pub async fn list_types(&self) -> Result<Vec<SensorType>, ApplicationError> {
        self.sensor_types.find_all().await
    }

    /// Whether a type is registered
    #[instrument(skip(self))]
    pub async fn type_exists(&self, id: SensorTypeId) -> Result<bool, ApplicationError> {
        self.sensor_types.exists(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockSensorTypeRepository;

    #[tokio::test]
    async fn list_types_passes_through() {
        let mut mock = MockSensorTypeRepository::new();
        mock.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![SensorType::new(SensorTypeId::TemperatureSensor)]));

        let types = SensorTypeService::new(Arc::new(mock))
            .list_types()
            .await
            .unwrap();

        assert_eq!(types.len(), 1);
        assert_eq!(types[0].id, SensorTypeId::TemperatureSensor);
    }

    #[tokio::test]
    async fn type_exists_passes_through() {
        let mut mock = MockSensorTypeRepository::new();
        mock.expect_exists().times(1).returning(|_| Ok(false));

        let exists = SensorTypeService::new(Arc::new(mock))
            .type_exists(SensorTypeId::WindSensor)
            .await
            .unwrap();

        assert!(!exists);
    }
}
