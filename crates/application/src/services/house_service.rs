//! House service
//!
//! Manages the singleton house: initial configuration and location updates.

use std::{fmt, sync::Arc};

use domain::entities::House;
use domain::factories::HouseFactory;
use domain::value_objects::Location;
use tracing::{debug, info, instrument};

use crate::{error::ApplicationError, ports::HouseRepository};

/// Service for the singleton house aggregate
pub struct HouseService {
    houses: Arc<dyn HouseRepository>,
    factory: Arc<dyn HouseFactory>,
}

impl fmt::Debug for HouseService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HouseService").finish_non_exhaustive()
    }
}

impl HouseService {
    /// Create a new house service
    #[must_use]
    pub fn new(houses: Arc<dyn HouseRepository>, factory: Arc<dyn HouseFactory>) -> Self {
        Self { houses, factory }
    }

    /// Configure the system's house at the given location
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::HouseAlreadyConfigured`] when a house
    /// already exists, or a persistence error from the repository.
    #[instrument(skip(self, location))]
    pub async fn add_house(&self, location: Location) -> Result<House, ApplicationError> {
        let house = self.factory.create_house(location);
        self.houses.save_singleton(&house).await?;
        info!(house_id = %house.id, "House configured");
        Ok(house)
    }

    /// Update the house's location in place
    ///
    /// Returns `Ok(None)` when no house is configured; nothing is written
    /// in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Persistence`] when the stored house
    /// cannot be replaced.
    #[instrument(skip(self, location))]
    pub async fn update_location(
        &self,
        location: Location,
    ) -> Result<Option<House>, ApplicationError> {
        let Some(mut house) = self.houses.get_singleton().await? else {
            debug!("No house configured, nothing to update");
            return Ok(None);
        };

        house.configure_location(location);
        if !self.houses.replace(&house).await? {
            return Err(ApplicationError::Persistence(
                "stored house disappeared during update".to_string(),
            ));
        }

        info!(house_id = %house.id, "House location updated");
        Ok(Some(house))
    }

    /// The configured house, if any
    #[instrument(skip(self))]
    pub async fn get_house(&self) -> Result<Option<House>, ApplicationError> {
        self.houses.get_singleton().await
    }
}

#[cfg(test)]
mod tests {
    use domain::factories::DefaultHouseFactory;
    use domain::value_objects::{Address, City, Country, Door, Gps, PostalCode, Street};

    use super::*;
    use crate::ports::MockHouseRepository;

    fn porto_location() -> Location {
        let address = Address::new(
            Door::new("1").unwrap(),
            Street::new("Rua de Santa Catarina").unwrap(),
            City::new("Porto").unwrap(),
            Country::Portugal,
            PostalCode::new(Country::Portugal, "PT-4000-009").unwrap(),
        )
        .unwrap();
        Location::new(address, Gps::from_degrees(41.14961, -8.61099).unwrap())
    }

    fn service(mock: MockHouseRepository) -> HouseService {
        HouseService::new(Arc::new(mock), Arc::new(DefaultHouseFactory))
    }

    #[tokio::test]
    async fn add_house_persists_and_returns_the_house() {
        let mut mock = MockHouseRepository::new();
        mock.expect_save_singleton().times(1).returning(|_| Ok(()));

        let result = service(mock).add_house(porto_location()).await;

        let house = result.unwrap();
        assert_eq!(house.location.address().city().as_str(), "Porto");
    }

    #[tokio::test]
    async fn add_house_propagates_singleton_conflict() {
        let mut mock = MockHouseRepository::new();
        mock.expect_save_singleton()
            .times(1)
            .returning(|_| Err(ApplicationError::HouseAlreadyConfigured));

        let result = service(mock).add_house(porto_location()).await;

        assert!(matches!(
            result,
            Err(ApplicationError::HouseAlreadyConfigured)
        ));
    }

    #[tokio::test]
    async fn update_location_without_house_returns_none_and_writes_nothing() {
        let mut mock = MockHouseRepository::new();
        mock.expect_get_singleton().times(1).returning(|| Ok(None));
        mock.expect_replace().times(0);

        let result = service(mock).update_location(porto_location()).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_location_replaces_the_stored_house() {
        let existing = House::new(porto_location());
        let existing_id = existing.id;

        let mut mock = MockHouseRepository::new();
        mock.expect_get_singleton()
            .times(1)
            .returning(move || Ok(Some(existing.clone())));
        mock.expect_replace().times(1).returning(|_| Ok(true));

        let updated = service(mock)
            .update_location(porto_location())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, existing_id);
    }

    #[tokio::test]
    async fn update_location_surfaces_replace_refusal_as_persistence_error() {
        let existing = House::new(porto_location());

        let mut mock = MockHouseRepository::new();
        mock.expect_get_singleton()
            .times(1)
            .returning(move || Ok(Some(existing.clone())));
        mock.expect_replace().times(1).returning(|_| Ok(false));

        let result = service(mock).update_location(porto_location()).await;

        assert!(matches!(result, Err(ApplicationError::Persistence(_))));
    }

    #[tokio::test]
    async fn get_house_passes_through() {
        let mut mock = MockHouseRepository::new();
        mock.expect_get_singleton().times(1).returning(|| Ok(None));

        let result = service(mock).get_house().await;

        assert!(result.unwrap().is_none());
    }
}
