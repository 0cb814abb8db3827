//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ActuatorService, ActuatorTypeService, DeviceService, HouseService, RoomService, SensorService,
    SensorTypeService,
};
use domain::factories::{
    DefaultActuatorFactory, DefaultDeviceFactory, DefaultHouseFactory, DefaultRoomFactory,
    DefaultSensorFactory,
};
use infrastructure::{AppConfig, Bootstrap};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// House configuration and location updates
    pub house_service: Arc<HouseService>,
    /// Room management
    pub room_service: Arc<RoomService>,
    /// Device management and queries
    pub device_service: Arc<DeviceService>,
    /// Sensor management
    pub sensor_service: Arc<SensorService>,
    /// Actuator management
    pub actuator_service: Arc<ActuatorService>,
    /// Sensor type catalog
    pub sensor_type_service: Arc<SensorTypeService>,
    /// Actuator type catalog
    pub actuator_type_service: Arc<ActuatorTypeService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Assemble the services over a wired repository set
    #[must_use]
    pub fn from_bootstrap(bootstrap: &Bootstrap, config: AppConfig) -> Self {
        let house_service = HouseService::new(
            Arc::clone(&bootstrap.houses),
            Arc::new(DefaultHouseFactory),
        );
        let room_service = RoomService::new(
            Arc::clone(&bootstrap.houses),
            Arc::clone(&bootstrap.rooms),
            Arc::new(DefaultRoomFactory),
        );
        let device_service = DeviceService::new(
            Arc::clone(&bootstrap.rooms),
            Arc::clone(&bootstrap.devices),
            Arc::clone(&bootstrap.sensors),
            Arc::clone(&bootstrap.actuators),
            Arc::new(DefaultDeviceFactory),
        );
        let sensor_service = SensorService::new(
            Arc::clone(&bootstrap.devices),
            Arc::clone(&bootstrap.sensor_types),
            Arc::clone(&bootstrap.sensors),
            Arc::new(DefaultSensorFactory),
        );
        let actuator_service = ActuatorService::new(
            Arc::clone(&bootstrap.devices),
            Arc::clone(&bootstrap.actuator_types),
            Arc::clone(&bootstrap.actuators),
            Arc::new(DefaultActuatorFactory),
        );
        let sensor_type_service = SensorTypeService::new(Arc::clone(&bootstrap.sensor_types));
        let actuator_type_service =
            ActuatorTypeService::new(Arc::clone(&bootstrap.actuator_types));

        Self {
            house_service: Arc::new(house_service),
            room_service: Arc::new(room_service),
            device_service: Arc::new(device_service),
            sensor_service: Arc::new(sensor_service),
            actuator_service: Arc::new(actuator_service),
            sensor_type_service: Arc::new(sensor_type_service),
            actuator_type_service: Arc::new(actuator_type_service),
            config: Arc::new(config),
        }
    }
}
