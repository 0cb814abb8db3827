//! House handlers
//!
//! `GET /house` returns the configured house with navigation links;
//! `PATCH /house` reconfigures its location. The location payload is parsed
//! into value objects exactly once, here at the edge.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use domain::entities::House;
use domain::value_objects::{
    Address, City, Country, Door, Gps, Location, PostalCode, Street,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Request body for configuring the house location
///
/// Latitude and longitude may be omitted and default to 0.
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub door: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl LocationRequest {
    /// Parse the raw payload into a validated [`Location`]
    fn into_location(self) -> Result<Location, ApiError> {
        let country: Country = self
            .country
            .parse()
            .map_err(|e: domain::DomainError| ApiError::bad_request(e.to_string()))?;
        let address = Address::new(
            Door::new(self.door).map_err(|e| ApiError::bad_request(e.to_string()))?,
            Street::new(self.street).map_err(|e| ApiError::bad_request(e.to_string()))?,
            City::new(self.city).map_err(|e| ApiError::bad_request(e.to_string()))?,
            country,
            PostalCode::new(country, self.postal_code)
                .map_err(|e| ApiError::bad_request(e.to_string()))?,
        )
        .map_err(|e| ApiError::bad_request(e.to_string()))?;
        let gps = Gps::from_degrees(self.latitude, self.longitude)
            .map_err(|e| ApiError::bad_request(e.to_string()))?;
        Ok(Location::new(address, gps))
    }
}

/// Navigation links attached to the house representation
#[derive(Debug, Serialize)]
pub struct HouseLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub configure_location: String,
    pub list_rooms: String,
    pub list_devices_by_functionality: String,
}

impl Default for HouseLinks {
    fn default() -> Self {
        Self {
            self_link: "/house".to_string(),
            configure_location: "/house".to_string(),
            list_rooms: "/rooms".to_string(),
            list_devices_by_functionality: "/devices/by-functionality".to_string(),
        }
    }
}

/// House representation
#[derive(Debug, Serialize)]
pub struct HouseResponse {
    pub id: String,
    pub door: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub links: HouseLinks,
}

impl From<&House> for HouseResponse {
    fn from(house: &House) -> Self {
        let address = house.location.address();
        let gps = house.location.gps();
        Self {
            id: house.id.to_string(),
            door: address.door().as_str().to_string(),
            street: address.street().as_str().to_string(),
            city: address.city().as_str().to_string(),
            country: address.country().as_str().to_string(),
            postal_code: address.postal_code().as_str().to_string(),
            latitude: gps.latitude(),
            longitude: gps.longitude(),
            links: HouseLinks::default(),
        }
    }
}

/// The configured house
///
/// GET /house
#[instrument(skip(state))]
pub async fn get_house(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let Some(house) = state.house_service.get_house().await? else {
        return Err(ApiError::NotFound("no house is configured".to_string()));
    };
    Ok((StatusCode::OK, Json(HouseResponse::from(&house))))
}

/// Reconfigure the house location
///
/// PATCH /house
#[instrument(skip(state, payload))]
pub async fn configure_location(
    State(state): State<AppState>,
    payload: Result<Json<LocationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // A malformed or incomplete body is a 400, not axum's default 422
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.to_string()))?;
    let location = request.into_location()?;

    let Some(house) = state.house_service.update_location(location).await? else {
        return Err(ApiError::unprocessable("no house is configured"));
    };

    info!(house_id = %house.id, "House location configured");
    Ok((StatusCode::OK, Json(HouseResponse::from(&house))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn porto_request() -> LocationRequest {
        LocationRequest {
            door: "1".to_string(),
            street: "Rua de Santa Catarina".to_string(),
            city: "Porto".to_string(),
            country: "Portugal".to_string(),
            postal_code: "PT-4000-009".to_string(),
            latitude: 41.14961,
            longitude: -8.61099,
        }
    }

    #[test]
    fn valid_request_parses_into_location() {
        let location = porto_request().into_location().unwrap();
        assert_eq!(location.address().country(), Country::Portugal);
        assert!((location.gps().latitude() - 41.14961).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_country_is_bad_request() {
        let mut request = porto_request();
        request.country = "Atlantis".to_string();
        assert!(matches!(
            request.into_location(),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn mismatched_postal_code_is_bad_request() {
        let mut request = porto_request();
        request.postal_code = "US-12345".to_string();
        assert!(matches!(
            request.into_location(),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn out_of_range_latitude_is_bad_request() {
        let mut request = porto_request();
        request.latitude = 91.0;
        assert!(matches!(
            request.into_location(),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn missing_coordinates_default_to_zero() {
        let request: LocationRequest = serde_json::from_str(
            r#"{"door":"1","street":"s","city":"c","country":"Portugal","postal_code":"PT-1234-567"}"#,
        )
        .unwrap();
        let location = request.into_location().unwrap();
        assert!((location.gps().latitude()).abs() < f64::EPSILON);
        assert!((location.gps().longitude()).abs() < f64::EPSILON);
    }

    #[test]
    fn response_carries_navigation_links() {
        let house = House::new(porto_request().into_location().unwrap());
        let response = HouseResponse::from(&house);
        assert_eq!(response.links.self_link, "/house");
        assert_eq!(response.links.list_rooms, "/rooms");
        assert_eq!(response.city, "Porto");
    }
}
