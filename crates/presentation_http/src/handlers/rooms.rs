//! Room handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use domain::entities::Room;
use domain::value_objects::{RoomDimensions, RoomFloor, RoomId, RoomName};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, handlers::devices::DeviceResponse, state::AppState};

/// Request body for adding a room
#[derive(Debug, Deserialize)]
pub struct AddRoomRequest {
    pub name: String,
    pub floor: i32,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Room representation
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub floor: i32,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub house_id: String,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name.as_str().to_string(),
            floor: room.floor.value(),
            length: room.dimensions.length(),
            width: room.dimensions.width(),
            height: room.dimensions.height(),
            house_id: room.house_id.to_string(),
        }
    }
}

/// Response wrapper for room listings
#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomResponse>,
}

/// All rooms
///
/// GET /rooms
#[instrument(skip(state))]
pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rooms = state.room_service.list_rooms().await?;
    let rooms = rooms.iter().map(RoomResponse::from).collect();
    Ok((StatusCode::OK, Json(RoomListResponse { rooms })))
}

/// Add a room to the configured house
///
/// POST /rooms
#[instrument(skip(state, payload))]
pub async fn add_room(
    State(state): State<AppState>,
    payload: Result<Json<AddRoomRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.to_string()))?;
    let name =
        RoomName::new(request.name).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let dimensions = RoomDimensions::from_meters(request.length, request.width, request.height)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let room = state
        .room_service
        .add_room(name, RoomFloor::new(request.floor), dimensions)
        .await?;

    info!(room_id = %room.id, "Room created");
    Ok((StatusCode::CREATED, Json(RoomResponse::from(&room))))
}

/// Devices in a room; an unknown room yields an empty list
///
/// GET /rooms/{room_id}/devices
#[instrument(skip(state))]
pub async fn list_devices_in_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let room_id: RoomId = room_id
        .parse()
        .map_err(|_| ApiError::bad_request("invalid room id"))?;

    let devices = state.device_service.list_devices_in_room(&room_id).await?;
    let devices: Vec<DeviceResponse> = devices.iter().map(DeviceResponse::from).collect();
    Ok((StatusCode::OK, Json(devices)))
}

#[cfg(test)]
mod tests {
    use domain::value_objects::HouseId;

    use super::*;

    #[test]
    fn room_response_carries_all_five_fields() {
        let room = Room::new(
            RoomName::new("bedRoom").unwrap(),
            RoomFloor::new(2),
            RoomDimensions::from_meters(2.2, 5.0, 4.5).unwrap(),
            HouseId::new(),
        );
        let response = RoomResponse::from(&room);

        assert_eq!(response.name, "bedRoom");
        assert_eq!(response.floor, 2);
        assert!((response.length - 2.2).abs() < f64::EPSILON);
        assert!((response.width - 5.0).abs() < f64::EPSILON);
        assert!((response.height - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn add_room_request_deserializes() {
        let request: AddRoomRequest = serde_json::from_str(
            r#"{"name":"bedRoom","floor":2,"length":2.2,"width":5.0,"height":4.5}"#,
        )
        .unwrap();
        assert_eq!(request.name, "bedRoom");
        assert_eq!(request.floor, 2);
    }
}
