//! Domain entities - aggregates with identity composed of value objects
//!
//! Cross-aggregate ownership is always by typed-ID reference, never by
//! containment; the persistence layer resolves references.

mod actuator;
mod actuator_type;
mod device;
mod house;
mod room;
mod sensor;
mod sensor_type;

pub use actuator::Actuator;
pub use actuator_type::ActuatorType;
pub use device::Device;
pub use house::House;
pub use room::Room;
pub use sensor::Sensor;
pub use sensor_type::SensorType;
