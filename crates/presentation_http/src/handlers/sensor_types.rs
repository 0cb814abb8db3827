//! Sensor type catalog handlers

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use domain::entities::SensorType;
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Sensor type representation
#[derive(Debug, Serialize)]
pub struct SensorTypeResponse {
    pub sensor_type: String,
    pub unit: String,
}

impl From<&SensorType> for SensorTypeResponse {
    fn from(entry: &SensorType) -> Self {
        Self {
            sensor_type: entry.id.as_str().to_string(),
            unit: entry.unit.symbol().to_string(),
        }
    }
}

/// All registered sensor types
///
/// GET /sensortypes
#[instrument(skip(state))]
pub async fn list_sensor_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let types = state.sensor_type_service.list_types().await?;
    let types: Vec<SensorTypeResponse> = types.iter().map(SensorTypeResponse::from).collect();
    Ok((StatusCode::OK, Json(types)))
}

#[cfg(test)]
mod tests {
    use domain::value_objects::SensorTypeId;

    use super::*;

    #[test]
    fn response_carries_type_name_and_unit() {
        let entry = SensorType::new(SensorTypeId::SolarIrradianceSensor);
        let response = SensorTypeResponse::from(&entry);
        assert_eq!(response.sensor_type, "SolarIrradianceSensor");
        assert_eq!(response.unit, "W/m2");
    }
}
