//! Actuator handlers
//!
//! The settings payload is tagged by kind and validated through the domain
//! constructors, so inverted limits or a bad precision never reach the
//! service layer.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use domain::entities::Actuator;
use domain::value_objects::{ActuatorName, ActuatorSettings, ActuatorTypeId, DeviceId};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, handlers::devices::map_owner_absence, state::AppState};

/// Settings payload, tagged by kind
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActuatorSettingsRequest {
    None,
    Integer { lower: i64, upper: i64 },
    Decimal { lower: f64, upper: f64, precision: f64 },
}

impl ActuatorSettingsRequest {
    /// Run the raw values through the validating domain constructors
    fn into_settings(self) -> Result<ActuatorSettings, ApiError> {
        match self {
            Self::None => Ok(ActuatorSettings::None),
            Self::Integer { lower, upper } => ActuatorSettings::integer(lower, upper)
                .map_err(|e| ApiError::bad_request(e.to_string())),
            Self::Decimal {
                lower,
                upper,
                precision,
            } => ActuatorSettings::decimal(lower, upper, precision)
                .map_err(|e| ApiError::bad_request(e.to_string())),
        }
    }
}

/// Request body for attaching an actuator to a device
#[derive(Debug, Deserialize)]
pub struct AddActuatorRequest {
    pub name: String,
    pub actuator_type: String,
    /// Omitted settings mean the actuator takes none
    pub settings: Option<ActuatorSettingsRequest>,
    pub device_id: String,
}

/// Actuator representation
#[derive(Debug, Serialize)]
pub struct ActuatorResponse {
    pub id: String,
    pub name: String,
    pub actuator_type: String,
    pub settings: ActuatorSettings,
    pub device_id: String,
}

impl From<&Actuator> for ActuatorResponse {
    fn from(actuator: &Actuator) -> Self {
        Self {
            id: actuator.id.to_string(),
            name: actuator.name.as_str().to_string(),
            actuator_type: actuator.actuator_type.as_str().to_string(),
            settings: actuator.settings,
            device_id: actuator.device_id.to_string(),
        }
    }
}

/// Attach an actuator to a device
///
/// POST /actuators
#[instrument(skip(state, payload))]
pub async fn add_actuator(
    State(state): State<AppState>,
    payload: Result<Json<AddActuatorRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.to_string()))?;
    let name =
        ActuatorName::new(request.name).map_err(|e| ApiError::bad_request(e.to_string()))?;
    let actuator_type: ActuatorTypeId = request
        .actuator_type
        .parse()
        .map_err(|e: domain::DomainError| ApiError::bad_request(e.to_string()))?;
    let settings = request
        .settings
        .map_or(Ok(ActuatorSettings::None), ActuatorSettingsRequest::into_settings)?;
    let device_id: DeviceId = request
        .device_id
        .parse()
        .map_err(|_| ApiError::bad_request("invalid device id"))?;

    let actuator = state
        .actuator_service
        .add_actuator(name, actuator_type, settings, device_id)
        .await
        .map_err(map_owner_absence)?;

    info!(actuator_id = %actuator.id, "Actuator created");
    Ok((StatusCode::CREATED, Json(ActuatorResponse::from(&actuator))))
}

/// All actuators
///
/// GET /actuators
#[instrument(skip(state))]
pub async fn list_actuators(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let actuators = state.actuator_service.list_actuators().await?;
    let actuators: Vec<ActuatorResponse> =
        actuators.iter().map(ActuatorResponse::from).collect();
    Ok((StatusCode::OK, Json(actuators)))
}
