//! Name value objects for rooms, devices, sensors and actuators
//!
//! A name is any non-blank string; surrounding whitespace is preserved as
//! given, only fully-blank input is rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

macro_rules! define_name {
    ($(#[doc = $doc:expr])* $name:ident, $kind:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new name, rejecting blank input
            ///
            /// # Errors
            ///
            /// Returns [`DomainError::InvalidName`] when the input is empty
            /// or consists only of whitespace.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::InvalidName { kind: $kind });
                }
                Ok(Self(value))
            }

            /// Access the inner string
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use define_name;

define_name!(
    /// Name of a room ("kitchen", "master bedroom")
    RoomName,
    "room name"
);

define_name!(
    /// Name of a device ("Thermostat A")
    DeviceName,
    "device name"
);

define_name!(
    /// Device model designation ("AC-1200")
    DeviceModel,
    "device model"
);

define_name!(
    /// Name of a sensor
    SensorName,
    "sensor name"
);

define_name!(
    /// Name of an actuator
    ActuatorName,
    "actuator name"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_names() {
        let name = RoomName::new("Living Room").unwrap();
        assert_eq!(name.as_str(), "Living Room");
    }

    #[test]
    fn rejects_empty_string() {
        assert!(DeviceName::new("").is_err());
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(SensorName::new("   \t").is_err());
    }

    #[test]
    fn error_names_the_vo_kind() {
        let err = ActuatorName::new("").unwrap_err();
        assert_eq!(err.to_string(), "Invalid actuator name: value must not be blank");
    }

    #[test]
    fn display_matches_inner_value() {
        let model = DeviceModel::new("AC-1200").unwrap();
        assert_eq!(model.to_string(), "AC-1200");
    }

    #[test]
    fn serde_is_transparent() {
        let name = RoomName::new("bedRoom").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"bedRoom\"");
        let parsed: RoomName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }
}
