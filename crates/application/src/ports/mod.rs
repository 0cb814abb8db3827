//! Ports - persistence interfaces consumed by the services
//!
//! Adapters in the infrastructure layer implement these traits; tests
//! substitute them with mockall mocks.

mod actuator_repository;
mod actuator_type_repository;
mod device_repository;
mod house_repository;
mod room_repository;
mod sensor_repository;
mod sensor_type_repository;

pub use actuator_repository::ActuatorRepository;
pub use actuator_type_repository::ActuatorTypeRepository;
pub use device_repository::DeviceRepository;
pub use house_repository::HouseRepository;
pub use room_repository::RoomRepository;
pub use sensor_repository::SensorRepository;
pub use sensor_type_repository::SensorTypeRepository;

#[cfg(test)]
pub use actuator_repository::MockActuatorRepository;
#[cfg(test)]
pub use actuator_type_repository::MockActuatorTypeRepository;
#[cfg(test)]
pub use device_repository::MockDeviceRepository;
#[cfg(test)]
pub use house_repository::MockHouseRepository;
#[cfg(test)]
pub use room_repository::MockRoomRepository;
#[cfg(test)]
pub use sensor_repository::MockSensorRepository;
#[cfg(test)]
pub use sensor_type_repository::MockSensorTypeRepository;
