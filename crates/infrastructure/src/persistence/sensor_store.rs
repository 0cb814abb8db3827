//! In-memory sensor store

use application::{error::ApplicationError, ports::SensorRepository};
use async_trait::async_trait;
use domain::entities::Sensor;
use domain::value_objects::SensorId;
use parking_lot::RwLock;
use tracing::instrument;

/// Vec-backed sensor store preserving insertion order
#[derive(Debug, Default)]
pub struct InMemorySensorStore {
    sensors: RwLock<Vec<Sensor>>,
}

impl InMemorySensorStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SensorRepository for InMemorySensorStore {
    #[instrument(skip(self, sensor), fields(sensor_id = %sensor.id))]
    async fn save(&self, sensor: &Sensor) -> Result<(), ApplicationError> {
        let mut sensors = self.sensors.write();
        if sensors.iter().any(|s| s.id == sensor.id) {
            return Err(ApplicationError::Persistence(format!(
                "sensor {} is already stored",
                sensor.id
            )));
        }
        sensors.push(sensor.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Sensor>, ApplicationError> {
        Ok(self.sensors.read().clone())
    }

    async fn find_by_id(&self, id: &SensorId) -> Result<Option<Sensor>, ApplicationError> {
        Ok(self.sensors.read().iter().find(|s| s.id == *id).cloned())
    }

    async fn exists(&self, id: &SensorId) -> Result<bool, ApplicationError> {
        Ok(self.sensors.read().iter().any(|s| s.id == *id))
    }
}
