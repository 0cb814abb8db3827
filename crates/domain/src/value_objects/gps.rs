//! GPS coordinate value objects

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Latitude in degrees, always within [-90, 90]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Latitude(f64);

impl Latitude {
    /// Create a latitude with range validation
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLatitude`] when the value is NaN or
    /// outside [-90, 90].
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&value) {
            return Err(DomainError::InvalidLatitude(value));
        }
        Ok(Self(value))
    }

    /// The degree value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Longitude in degrees, always within [-180, 180]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Longitude(f64);

impl Longitude {
    /// Create a longitude with range validation
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLongitude`] when the value is NaN or
    /// outside [-180, 180].
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(-180.0..=180.0).contains(&value) {
            return Err(DomainError::InvalidLongitude(value));
        }
        Ok(Self(value))
    }

    /// The degree value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// A validated latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gps {
    latitude: Latitude,
    longitude: Longitude,
}

impl Gps {
    /// Pair two validated coordinates
    #[must_use]
    pub const fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate raw degree values and pair them
    ///
    /// # Errors
    ///
    /// Returns the first coordinate error encountered.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        Ok(Self {
            latitude: Latitude::new(latitude)?,
            longitude: Longitude::new(longitude)?,
        })
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude.value()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude.value()
    }
}

impl fmt::Display for Gps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude(), self.longitude())
    }
}
