//! Room dimension value objects
//!
//! Width and height are strictly positive. Length may be zero: open spaces
//! (hallways, mezzanines) are modelled as zero-length rooms.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Room length in meters, zero allowed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomLength(f64);

impl RoomLength {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDimension`] when the value is negative
    /// or not finite.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidDimension {
                dimension: "length",
                value,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Room width in meters, strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomWidth(f64);

impl RoomWidth {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDimension`] when the value is zero,
    /// negative or not finite.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidDimension {
                dimension: "width",
                value,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// Room height in meters, strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomHeight(f64);

impl RoomHeight {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDimension`] when the value is zero,
    /// negative or not finite.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::InvalidDimension {
                dimension: "height",
                value,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// The three dimensions of a room
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    length: RoomLength,
    width: RoomWidth,
    height: RoomHeight,
}

impl RoomDimensions {
    /// Compose already-validated dimensions
    #[must_use]
    pub const fn new(length: RoomLength, width: RoomWidth, height: RoomHeight) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Validate raw meter values and compose them
    ///
    /// # Errors
    ///
    /// Returns the first dimension error encountered.
    pub fn from_meters(length: f64, width: f64, height: f64) -> Result<Self, DomainError> {
        Ok(Self {
            length: RoomLength::new(length)?,
            width: RoomWidth::new(width)?,
            height: RoomHeight::new(height)?,
        })
    }

    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length.value()
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width.value()
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_dimensions_accepted() {
        let dims = RoomDimensions::from_meters(2.2, 5.0, 4.5).unwrap();
        assert!((dims.length() - 2.2).abs() < f64::EPSILON);
        assert!((dims.width() - 5.0).abs() < f64::EPSILON);
        assert!((dims.height() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_length_allowed_for_open_spaces() {
        assert!(RoomLength::new(0.0).is_ok());
        assert!(RoomDimensions::from_meters(0.0, 3.0, 2.5).is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        assert!(RoomWidth::new(0.0).is_err());
    }

    #[test]
    fn zero_height_rejected() {
        assert!(RoomHeight::new(0.0).is_err());
    }

    #[test]
    fn negative_values_rejected() {
        assert!(RoomLength::new(-0.1).is_err());
        assert!(RoomWidth::new(-2.0).is_err());
        assert!(RoomHeight::new(-2.0).is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        assert!(RoomLength::new(f64::NAN).is_err());
        assert!(RoomWidth::new(f64::INFINITY).is_err());
    }

    #[test]
    fn width_value_roundtrips() {
        let width = RoomWidth::new(3.5).unwrap();
        assert!((width.value() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn error_names_the_dimension() {
        let err = RoomHeight::new(-1.0).unwrap_err();
        assert!(err.to_string().contains("height"));
    }
}
