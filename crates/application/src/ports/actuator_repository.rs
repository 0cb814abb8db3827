//! Actuator storage port

use async_trait::async_trait;
use domain::entities::Actuator;
use domain::value_objects::ActuatorId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for actuator persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ActuatorRepository: Send + Sync {
    /// Store a new actuator
    async fn save(&self, actuator: &Actuator) -> Result<(), ApplicationError>;

    /// All actuators in insertion order
    async fn find_all(&self) -> Result<Vec<Actuator>, ApplicationError>;

    /// An actuator by its identifier
    async fn find_by_id(&self, id: &ActuatorId) -> Result<Option<Actuator>, ApplicationError>;

    /// Whether an actuator with this identifier is stored
    async fn exists(&self, id: &ActuatorId) -> Result<bool, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ActuatorRepository>();
    }
}
