//! Device handlers

use application::ApplicationError;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use domain::entities::Device;
use domain::value_objects::{DeviceId, DeviceModel, DeviceName, RoomId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Request body for adding a device to a room
#[derive(Debug, Deserialize)]
pub struct AddDeviceRequest {
    pub name: String,
    pub model: String,
    pub room_id: String,
}

/// Device representation
#[derive(Debug, Serialize)]
pub struct DeviceResponse {
    pub id: String,
    pub name: String,
    pub model: String,
    pub status: String,
    pub room_id: String,
}

impl From<&Device> for DeviceResponse {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id.to_string(),
            name: device.name.as_str().to_string(),
            model: device.model.as_str().to_string(),
            status: device.status.to_string(),
            room_id: device.room_id.to_string(),
        }
    }
}

/// Add a device to an existing room
///
/// POST /devices
#[instrument(skip(state, payload))]
pub async fn add_device(
    State(state): State<AppState>,
    payload: Result<Json<AddDeviceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.to_string()))?;
    let name =
        DeviceName::new(request.name).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let model =
        DeviceModel::new(request.model).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let room_id: RoomId = request
        .room_id
        .parse()
        .map_err(|_| ApiError::bad_request("invalid room id"))?;

    let device = state
        .device_service
        .add_device(name, model, room_id)
        .await
        .map_err(map_owner_absence)?;

    info!(device_id = %device.id, "Device created");
    Ok((StatusCode::CREATED, Json(DeviceResponse::from(&device))))
}

/// A device by id
///
/// GET /devices/{device_id}
#[instrument(skip(state))]
pub async fn get_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let device_id: DeviceId = device_id
        .parse()
        .map_err(|_| ApiError::bad_request("invalid device id"))?;

    let Some(device) = state.device_service.get_device(&device_id).await? else {
        return Err(ApiError::NotFound(format!("device {device_id}")));
    };
    Ok((StatusCode::OK, Json(DeviceResponse::from(&device))))
}

/// Deactivate a device
///
/// PATCH /devices/{device_id}/deactivate
#[instrument(skip(state))]
pub async fn deactivate_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let device_id: DeviceId = device_id
        .parse()
        .map_err(|_| ApiError::bad_request("invalid device id"))?;

    let device = state.device_service.deactivate_device(&device_id).await?;

    info!(%device_id, "Device deactivated");
    Ok((StatusCode::OK, Json(DeviceResponse::from(&device))))
}

/// Devices grouped by functionality, keys in first-encounter order
///
/// GET /devices/by-functionality
#[instrument(skip(state))]
pub async fn list_devices_by_functionality(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let grouped = state.device_service.list_devices_by_functionality().await?;

    let grouped: IndexMap<String, Vec<DeviceResponse>> = grouped
        .iter()
        .map(|(type_name, devices)| {
            (
                type_name.clone(),
                devices.iter().map(DeviceResponse::from).collect(),
            )
        })
        .collect();

    Ok((StatusCode::OK, Json(grouped)))
}

/// On creation endpoints a missing owner is a semantic failure of the
/// payload, not a missing resource: map it to 422 instead of 404.
pub(crate) fn map_owner_absence(err: ApplicationError) -> ApiError {
    match err {
        ApplicationError::NotFound { .. } => ApiError::unprocessable(err.to_string()),
        other => other.into(),
    }
}
