//! Application layer for smartnest
//!
//! Use-case services and the ports (repository traits) they depend on.
//! Services accept already-validated value objects, orchestrate factories
//! and repositories, and normalize every failure into
//! [`ApplicationError`] - nothing panics across this boundary.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    ActuatorService, ActuatorTypeService, DeviceService, HouseService, RoomService, SensorService,
    SensorTypeService,
};
