//! Domain-level errors

use thiserror::Error;

/// Errors raised when a value object or entity rejects its input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A name value was blank or empty
    #[error("Invalid {kind}: value must not be blank")]
    InvalidName {
        /// Which name VO rejected the input (e.g. "room name")
        kind: &'static str,
    },

    /// Country not part of the supported set
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    /// Postal code does not match the country's pattern
    #[error("Invalid postal code for {country}: {code}")]
    InvalidPostalCode {
        /// Country the code was validated against
        country: String,
        /// The rejected code
        code: String,
    },

    /// Latitude outside [-90, 90]
    #[error("Invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180]
    #[error("Invalid longitude: {0} (must be -180 to 180)")]
    InvalidLongitude(f64),

    /// Room dimension outside its allowed range
    #[error("Invalid room {dimension}: {value}")]
    InvalidDimension {
        /// Which dimension was rejected ("length", "width", "height")
        dimension: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Actuator settings values are inconsistent
    #[error("Invalid actuator settings: {0}")]
    InvalidSettings(String),

    /// Actuator settings shape does not fit the actuator type
    #[error("Settings do not match actuator type {actuator_type}")]
    SettingsMismatch {
        /// The type that rejected the settings
        actuator_type: String,
    },

    /// A type name that is not part of the closed catalog
    #[error("Unknown type name: {0}")]
    UnknownTypeName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_name_message() {
        let err = DomainError::InvalidName { kind: "room name" };
        assert_eq!(err.to_string(), "Invalid room name: value must not be blank");
    }

    #[test]
    fn postal_code_message_names_country() {
        let err = DomainError::InvalidPostalCode {
            country: "Portugal".to_string(),
            code: "XX-0000".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid postal code for Portugal: XX-0000"
        );
    }

    #[test]
    fn latitude_message_carries_value() {
        let err = DomainError::InvalidLatitude(91.5);
        assert!(err.to_string().contains("91.5"));
    }

    #[test]
    fn settings_mismatch_names_type() {
        let err = DomainError::SettingsMismatch {
            actuator_type: "SwitchActuator".to_string(),
        };
        assert!(err.to_string().contains("SwitchActuator"));
    }
}
