//! In-memory sensor type catalog

use application::{error::ApplicationError, ports::SensorTypeRepository};
use async_trait::async_trait;
use domain::entities::SensorType;
use domain::value_objects::SensorTypeId;
use parking_lot::RwLock;

/// Vec-backed sensor type catalog preserving registration order
#[derive(Debug, Default)]
pub struct InMemorySensorTypeStore {
    types: RwLock<Vec<SensorType>>,
}

impl InMemorySensorTypeStore {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SensorTypeRepository for InMemorySensorTypeStore {
    async fn save(&self, sensor_type: &SensorType) -> Result<(), ApplicationError> {
        let mut types = self.types.write();
        if types.iter().any(|t| t.id == sensor_type.id) {
            return Err(ApplicationError::Persistence(format!(
                "sensor type {} is already registered",
                sensor_type.id
            )));
        }
        types.push(*sensor_type);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<SensorType>, ApplicationError> {
        Ok(self.types.read().clone())
    }

    async fn exists(&self, id: SensorTypeId) -> Result<bool, ApplicationError> {
        Ok(self.types.read().iter().any(|t| t.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registration_order_is_preserved() {
        let store = InMemorySensorTypeStore::new();
        store
            .save(&SensorType::new(SensorTypeId::HumiditySensor))
            .await
            .unwrap();
        store
            .save(&SensorType::new(SensorTypeId::TemperatureSensor))
            .await
            .unwrap();

        let ids: Vec<SensorTypeId> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(
            ids,
            [SensorTypeId::HumiditySensor, SensorTypeId::TemperatureSensor]
        );
    }

    #[tokio::test]
    async fn double_registration_is_rejected() {
        let store = InMemorySensorTypeStore::new();
        let entry = SensorType::new(SensorTypeId::WindSensor);
        store.save(&entry).await.unwrap();

        assert!(store.save(&entry).await.is_err());
    }

    #[tokio::test]
    async fn exists_reflects_registration() {
        let store = InMemorySensorTypeStore::new();
        store
            .save(&SensorType::new(SensorTypeId::SwitchSensor))
            .await
            .unwrap();

        assert!(store.exists(SensorTypeId::SwitchSensor).await.unwrap());
        assert!(!store.exists(SensorTypeId::WindSensor).await.unwrap());
    }
}
