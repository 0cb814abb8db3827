//! Sensor storage port

use async_trait::async_trait;
use domain::entities::Sensor;
use domain::value_objects::SensorId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for sensor persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SensorRepository: Send + Sync {
    /// Store a new sensor
    async fn save(&self, sensor: &Sensor) -> Result<(), ApplicationError>;

    /// All sensors in insertion order
    async fn find_all(&self) -> Result<Vec<Sensor>, ApplicationError>;

    /// A sensor by its identifier
    async fn find_by_id(&self, id: &SensorId) -> Result<Option<Sensor>, ApplicationError>;

    /// Whether a sensor with this identifier is stored
    async fn exists(&self, id: &SensorId) -> Result<bool, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SensorRepository>();
    }
}
