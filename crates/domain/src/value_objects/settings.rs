//! Actuator settings value objects
//!
//! Range-controlled actuators carry their operating limits; on/off and
//! roller-blind actuators carry none. Which shape an actuator accepts is
//! declared by its [`ActuatorTypeId`](super::ActuatorTypeId) variant and
//! checked when the actuator is constructed.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Operating settings for an actuator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActuatorSettings {
    /// No settings; the actuator has a fixed command set
    None,
    /// Integer range limits, `lower < upper`
    Integer { lower: i64, upper: i64 },
    /// Decimal range limits with a step precision in (0, 1)
    Decimal {
        lower: f64,
        upper: f64,
        precision: f64,
    },
}

impl ActuatorSettings {
    /// Validate integer limits
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSettings`] when `lower >= upper`.
    pub fn integer(lower: i64, upper: i64) -> Result<Self, DomainError> {
        if lower >= upper {
            return Err(DomainError::InvalidSettings(format!(
                "lower limit {lower} must be below upper limit {upper}"
            )));
        }
        Ok(Self::Integer { lower, upper })
    }

    /// Validate decimal limits and precision
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSettings`] when the limits are not
    /// finite, `lower >= upper`, or the precision is outside (0, 1).
    pub fn decimal(lower: f64, upper: f64, precision: f64) -> Result<Self, DomainError> {
        if !lower.is_finite() || !upper.is_finite() || !precision.is_finite() {
            return Err(DomainError::InvalidSettings(
                "limits and precision must be finite".to_string(),
            ));
        }
        if lower >= upper {
            return Err(DomainError::InvalidSettings(format!(
                "lower limit {lower} must be below upper limit {upper}"
            )));
        }
        if precision <= 0.0 || precision >= 1.0 {
            return Err(DomainError::InvalidSettings(format!(
                "precision {precision} must be within (0, 1)"
            )));
        }
        Ok(Self::Decimal {
            lower,
            upper,
            precision,
        })
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
