//! In-memory house store
//!
//! Holds at most one house; the singleton invariant is enforced here, not
//! by convention.

use application::{error::ApplicationError, ports::HouseRepository};
use async_trait::async_trait;
use domain::entities::House;
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// In-memory implementation of the singleton house port
#[derive(Debug, Default)]
pub struct InMemoryHouseStore {
    house: RwLock<Option<House>>,
}

impl InMemoryHouseStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HouseRepository for InMemoryHouseStore {
    #[instrument(skip(self, house), fields(house_id = %house.id))]
    async fn save_singleton(&self, house: &House) -> Result<(), ApplicationError> {
        let mut slot = self.house.write();
        if slot.is_some() {
            return Err(ApplicationError::HouseAlreadyConfigured);
        }
        *slot = Some(house.clone());
        debug!("House stored");
        Ok(())
    }

    async fn get_singleton(&self) -> Result<Option<House>, ApplicationError> {
        Ok(self.house.read().clone())
    }

    #[instrument(skip(self, house), fields(house_id = %house.id))]
    async fn replace(&self, house: &House) -> Result<bool, ApplicationError> {
        let mut slot = self.house.write();
        match slot.as_ref() {
            Some(stored) if stored.id == house.id => {
                *slot = Some(house.clone());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn exists(&self) -> Result<bool, ApplicationError> {
        Ok(self.house.read().is_some())
    }
}
