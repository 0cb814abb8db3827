//! Sensor handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use domain::entities::Sensor;
use domain::value_objects::{DeviceId, SensorName, SensorTypeId};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, handlers::devices::map_owner_absence, state::AppState};

/// Request body for attaching a sensor to a device
#[derive(Debug, Deserialize)]
pub struct AddSensorRequest {
    pub name: String,
    pub sensor_type: String,
    pub device_id: String,
}

/// Sensor representation
#[derive(Debug, Serialize)]
pub struct SensorResponse {
    pub id: String,
    pub name: String,
    pub sensor_type: String,
    pub unit: String,
    pub device_id: String,
}

impl From<&Sensor> for SensorResponse {
    fn from(sensor: &Sensor) -> Self {
        Self {
            id: sensor.id.to_string(),
            name: sensor.name.as_str().to_string(),
            sensor_type: sensor.sensor_type.as_str().to_string(),
            unit: sensor.unit().symbol().to_string(),
            device_id: sensor.device_id.to_string(),
        }
    }
}

/// Attach a sensor to a device
///
/// POST /sensors
#[instrument(skip(state, payload))]
pub async fn add_sensor(
    State(state): State<AppState>,
    payload: Result<Json<AddSensorRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.to_string()))?;
    let name =
        SensorName::new(request.name).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let sensor_type: SensorTypeId = request
        .sensor_type
        .parse()
        .map_err(|e: domain::DomainError| ApiError::bad_request(e.to_string()))?;
    let device_id: DeviceId = request
        .device_id
        .parse()
        .map_err(|_| ApiError::bad_request("invalid device id"))?;

    let sensor = state
        .sensor_service
        .add_sensor(name, sensor_type, device_id)
        .await
        .map_err(map_owner_absence)?;

    info!(sensor_id = %sensor.id, "Sensor created");
    Ok((StatusCode::CREATED, Json(SensorResponse::from(&sensor))))
}

/// All sensors
///
/// GET /sensors
#[instrument(skip(state))]
pub async fn list_sensors(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let sensors = state.sensor_service.list_sensors().await?;
    let sensors: Vec<SensorResponse> = sensors.iter().map(SensorResponse::from).collect();
    Ok((StatusCode::OK, Json(sensors)))
}
