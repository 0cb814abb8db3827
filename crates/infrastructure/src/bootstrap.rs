//! Startup wiring
//!
//! Builds the in-memory stores, registers the configured type catalogs, and
//! optionally seeds demo data so a fresh system has something to show.

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{
    ActuatorRepository, ActuatorTypeRepository, DeviceRepository, HouseRepository, RoomRepository,
    SensorRepository, SensorTypeRepository,
};
use domain::entities::{Actuator, ActuatorType, Device, House, Room, Sensor, SensorType};
use domain::value_objects::{
    ActuatorName, ActuatorSettings, ActuatorTypeId, Address, City, Country, DeviceModel,
    DeviceName, Door, Gps, Location, PostalCode, RoomDimensions, RoomFloor, RoomName, SensorName,
    SensorTypeId, Street,
};
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::persistence::{
    InMemoryActuatorStore, InMemoryActuatorTypeStore, InMemoryDeviceStore, InMemoryHouseStore,
    InMemoryRoomStore, InMemorySensorStore, InMemorySensorTypeStore,
};

/// The wired repository set for a running system
pub struct Bootstrap {
    pub houses: Arc<dyn HouseRepository>,
    pub rooms: Arc<dyn RoomRepository>,
    pub devices: Arc<dyn DeviceRepository>,
    pub sensors: Arc<dyn SensorRepository>,
    pub actuators: Arc<dyn ActuatorRepository>,
    pub sensor_types: Arc<dyn SensorTypeRepository>,
    pub actuator_types: Arc<dyn ActuatorTypeRepository>,
}

impl std::fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap").finish_non_exhaustive()
    }
}

impl Bootstrap {
    /// Build the stores and register the configured type catalogs
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] when the catalog names
    /// a type outside the closed set.
    #[instrument(skip(config))]
    pub async fn initialize(config: &AppConfig) -> Result<Self, ApplicationError> {
        let (sensor_type_ids, actuator_type_ids) = config.catalog.resolve()?;

        let sensor_types = InMemorySensorTypeStore::new();
        for id in &sensor_type_ids {
            sensor_types.save(&SensorType::new(*id)).await?;
        }
        let actuator_types = InMemoryActuatorTypeStore::new();
        for id in &actuator_type_ids {
            actuator_types.save(&ActuatorType::new(*id)).await?;
        }

        info!(
            sensor_types = sensor_type_ids.len(),
            actuator_types = actuator_type_ids.len(),
            "Type catalogs registered"
        );

        let bootstrap = Self {
            houses: Arc::new(InMemoryHouseStore::new()),
            rooms: Arc::new(InMemoryRoomStore::new()),
            devices: Arc::new(InMemoryDeviceStore::new()),
            sensors: Arc::new(InMemorySensorStore::new()),
            actuators: Arc::new(InMemoryActuatorStore::new()),
            sensor_types: Arc::new(sensor_types),
            actuator_types: Arc::new(actuator_types),
        };

        if config.seed.demo_data {
            seed_demo_data(&bootstrap).await?;
        }

        Ok(bootstrap)
    }
}

/// Seed a default house, three rooms, their devices and attachments
///
/// The house location is a placeholder (Portugal, PT-1234-567, GPS 0/0)
/// meant to be reconfigured through the API afterwards.
#[instrument(skip(bootstrap))]
pub async fn seed_demo_data(bootstrap: &Bootstrap) -> Result<(), ApplicationError> {
    let address = Address::new(
        Door::new("default door")?,
        Street::new("default street")?,
        City::new("default city")?,
        Country::Portugal,
        PostalCode::new(Country::Portugal, "PT-1234-567")?,
    )?;
    let house = House::new(Location::new(address, Gps::from_degrees(0.0, 0.0)?));
    bootstrap.houses.save_singleton(&house).await?;

    let circuit_room = Room::new(
        RoomName::new("Electrical Circuit Room")?,
        RoomFloor::new(-1),
        RoomDimensions::from_meters(2.0, 2.0, 2.5)?,
        house.id,
    );
    let garden = Room::new(
        RoomName::new("Garden")?,
        RoomFloor::new(0),
        RoomDimensions::from_meters(0.0, 15.0, 2.0)?,
        house.id,
    );
    let kitchen = Room::new(
        RoomName::new("Kitchen")?,
        RoomFloor::new(0),
        RoomDimensions::from_meters(5.0, 4.0, 2.6)?,
        house.id,
    );
    for room in [&circuit_room, &garden, &kitchen] {
        bootstrap.rooms.save(room).await?;
    }

    let power_meter = Device::new(
        DeviceName::new("Grid Power Meter")?,
        DeviceModel::new("GPM-1000")?,
        circuit_room.id,
    );
    let garden_thermometer = Device::new(
        DeviceName::new("Garden Thermometer")?,
        DeviceModel::new("TH-20")?,
        garden.id,
    );
    let kitchen_blinds = Device::new(
        DeviceName::new("Kitchen Blinds")?,
        DeviceModel::new("RB-2")?,
        kitchen.id,
    );
    for device in [&power_meter, &garden_thermometer, &kitchen_blinds] {
        bootstrap.devices.save(device).await?;
    }

    bootstrap
        .sensors
        .save(&Sensor::new(
            SensorName::new("Grid energy consumption")?,
            SensorTypeId::EnergyConsumptionSensor,
            power_meter.id,
        ))
        .await?;
    bootstrap
        .sensors
        .save(&Sensor::new(
            SensorName::new("Garden temperature")?,
            SensorTypeId::TemperatureSensor,
            garden_thermometer.id,
        ))
        .await?;
    bootstrap
        .actuators
        .save(&Actuator::new(
            ActuatorName::new("Kitchen blinds control")?,
            ActuatorTypeId::RollerBlindActuator,
            ActuatorSettings::None,
            kitchen_blinds.id,
        )?)
        .await?;

    info!("Demo data seeded");
    Ok(())
}
