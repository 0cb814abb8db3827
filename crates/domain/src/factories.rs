//! Aggregate factories
//!
//! Stateless construction seams between services and entity constructors.
//! Services depend on the traits so tests can substitute construction; the
//! default implementations just delegate to the entities.

use crate::entities::{Actuator, Device, House, Room, Sensor};
use crate::errors::DomainError;
use crate::value_objects::{
    ActuatorName, ActuatorSettings, ActuatorTypeId, DeviceId, DeviceModel, DeviceName, HouseId,
    Location, RoomDimensions, RoomFloor, RoomId, RoomName, SensorName, SensorTypeId,
};

/// Creates [`House`] aggregates
pub trait HouseFactory: Send + Sync {
    fn create_house(&self, location: Location) -> House;
}

/// Creates [`Room`] aggregates
pub trait RoomFactory: Send + Sync {
    fn create_room(
        &self,
        name: RoomName,
        floor: RoomFloor,
        dimensions: RoomDimensions,
        house_id: HouseId,
    ) -> Room;
}

/// Creates [`Device`] aggregates
pub trait DeviceFactory: Send + Sync {
    fn create_device(&self, name: DeviceName, model: DeviceModel, room_id: RoomId) -> Device;
}

/// Creates [`Sensor`] aggregates
pub trait SensorFactory: Send + Sync {
    fn create_sensor(
        &self,
        name: SensorName,
        sensor_type: SensorTypeId,
        device_id: DeviceId,
    ) -> Sensor;
}

/// Creates [`Actuator`] aggregates
///
/// The only fallible factory: the settings shape is checked against the
/// actuator type.
pub trait ActuatorFactory: Send + Sync {
    fn create_actuator(
        &self,
        name: ActuatorName,
        actuator_type: ActuatorTypeId,
        settings: ActuatorSettings,
        device_id: DeviceId,
    ) -> Result<Actuator, DomainError>;
}

/// Default factory delegating to the entity constructors
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHouseFactory;

impl HouseFactory for DefaultHouseFactory {
    fn create_house(&self, location: Location) -> House {
        House::new(location)
    }
}

/// Default factory delegating to the entity constructors
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRoomFactory;

impl RoomFactory for DefaultRoomFactory {
    fn create_room(
        &self,
        name: RoomName,
        floor: RoomFloor,
        dimensions: RoomDimensions,
        house_id: HouseId,
    ) -> Room {
        Room::new(name, floor, dimensions, house_id)
    }
}

/// Default factory delegating to the entity constructors
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDeviceFactory;

impl DeviceFactory for DefaultDeviceFactory {
    fn create_device(&self, name: DeviceName, model: DeviceModel, room_id: RoomId) -> Device {
        Device::new(name, model, room_id)
    }
}

/// Default factory delegating to the entity constructors
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSensorFactory;

impl SensorFactory for DefaultSensorFactory {
    fn create_sensor(
        &self,
        name: SensorName,
        sensor_type: SensorTypeId,
        device_id: DeviceId,
    ) -> Sensor {
        Sensor::new(name, sensor_type, device_id)
    }
}

/// Default factory delegating to the entity constructors
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultActuatorFactory;

impl ActuatorFactory for DefaultActuatorFactory {
    fn create_actuator(
        &self,
        name: ActuatorName,
        actuator_type: ActuatorTypeId,
        settings: ActuatorSettings,
        device_id: DeviceId,
    ) -> Result<Actuator, DomainError> {
        Actuator::new(name, actuator_type, settings, device_id)
    }
}
