//! HTTP request handlers

pub mod actuator_types;
pub mod actuators;
pub mod devices;
pub mod health;
pub mod house;
pub mod rooms;
pub mod sensor_types;
pub mod sensors;
