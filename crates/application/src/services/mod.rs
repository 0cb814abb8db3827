//! Use-case services
//!
//! One service per aggregate; each operation is a single atomic attempt
//! with no retries or partial-failure semantics.

mod actuator_service;
mod actuator_type_service;
mod device_service;
mod house_service;
mod room_service;
mod sensor_service;
mod sensor_type_service;

pub use actuator_service::ActuatorService;
pub use actuator_type_service::ActuatorTypeService;
pub use device_service::DeviceService;
pub use house_service::HouseService;
pub use room_service::RoomService;
pub use sensor_service::SensorService;
pub use sensor_type_service::SensorTypeService;
