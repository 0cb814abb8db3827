//! Route definitions

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // House
        .route(
            "/house",
            get(handlers::house::get_house).patch(handlers::house::configure_location),
        )
        // Rooms
        .route(
            "/rooms",
            get(handlers::rooms::list_rooms).post(handlers::rooms::add_room),
        )
        .route(
            "/rooms/{room_id}/devices",
            get(handlers::rooms::list_devices_in_room),
        )
        // Devices
        .route("/devices", post(handlers::devices::add_device))
        .route(
            "/devices/by-functionality",
            get(handlers::devices::list_devices_by_functionality),
        )
        .route("/devices/{device_id}", get(handlers::devices::get_device))
        .route(
            "/devices/{device_id}/deactivate",
            patch(handlers::devices::deactivate_device),
        )
        // Sensors and actuators
        .route(
            "/sensors",
            get(handlers::sensors::list_sensors).post(handlers::sensors::add_sensor),
        )
        .route(
            "/actuators",
            get(handlers::actuators::list_actuators).post(handlers::actuators::add_actuator),
        )
        // Type catalogs
        .route(
            "/sensortypes",
            get(handlers::sensor_types::list_sensor_types),
        )
        .route(
            "/actuatortypes",
            get(handlers::actuator_types::list_actuator_types),
        )
        // Attach state
        .with_state(state)
}
