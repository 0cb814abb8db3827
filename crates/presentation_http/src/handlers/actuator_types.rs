//! Actuator type catalog handlers

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use domain::entities::ActuatorType;
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Actuator type representation
#[derive(Debug, Serialize)]
pub struct ActuatorTypeResponse {
    pub actuator_type: String,
}

impl From<&ActuatorType> for ActuatorTypeResponse {
    fn from(entry: &ActuatorType) -> Self {
        Self {
            actuator_type: entry.id.as_str().to_string(),
        }
    }
}

/// All registered actuator types
///
/// GET /actuatortypes
#[instrument(skip(state))]
pub async fn list_actuator_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let types = state.actuator_type_service.list_types().await?;
    let types: Vec<ActuatorTypeResponse> =
        types.iter().map(ActuatorTypeResponse::from).collect();
    Ok((StatusCode::OK, Json(types)))
}
