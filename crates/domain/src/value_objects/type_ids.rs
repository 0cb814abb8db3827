//! Closed catalogs of sensor and actuator types
//!
//! Type names are a fixed vocabulary, not free strings: each variant carries
//! its own metadata (unit of measurement, accepted settings shape), resolved
//! at construction time. Parsing an unknown name fails immediately.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::settings::ActuatorSettings;
use crate::errors::DomainError;

/// Unit of measurement reported by a sensor type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    Celsius,
    Percent,
    KilometersPerHour,
    Watts,
    WattHours,
    WattsPerSquareMeter,
    Timestamp,
    Binary,
}

impl MeasurementUnit {
    /// Symbol used in DTOs and display output
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Percent => "%",
            Self::KilometersPerHour => "Km/h",
            Self::Watts => "W",
            Self::WattHours => "W/h",
            Self::WattsPerSquareMeter => "W/m2",
            Self::Timestamp => "Timestamp",
            Self::Binary => "Binary",
        }
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The closed set of sensor types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorTypeId {
    TemperatureSensor,
    HumiditySensor,
    PositionSensor,
    WindSensor,
    DewPointSensor,
    SunsetSensor,
    SunriseSensor,
    AveragePowerConsumptionSensor,
    PowerConsumptionSensor,
    EnergyConsumptionSensor,
    SwitchSensor,
    SolarIrradianceSensor,
}

impl SensorTypeId {
    /// Every known sensor type, in catalog order
    pub const ALL: [Self; 12] = [
        Self::TemperatureSensor,
        Self::HumiditySensor,
        Self::PositionSensor,
        Self::WindSensor,
        Self::DewPointSensor,
        Self::SunsetSensor,
        Self::SunriseSensor,
        Self::AveragePowerConsumptionSensor,
        Self::PowerConsumptionSensor,
        Self::EnergyConsumptionSensor,
        Self::SwitchSensor,
        Self::SolarIrradianceSensor,
    ];

    /// Canonical type name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TemperatureSensor => "TemperatureSensor",
            Self::HumiditySensor => "HumiditySensor",
            Self::PositionSensor => "PositionSensor",
            Self::WindSensor => "WindSensor",
            Self::DewPointSensor => "DewPointSensor",
            Self::SunsetSensor => "SunsetSensor",
            Self::SunriseSensor => "SunriseSensor",
            Self::AveragePowerConsumptionSensor => "AveragePowerConsumptionSensor",
            Self::PowerConsumptionSensor => "PowerConsumptionSensor",
            Self::EnergyConsumptionSensor => "EnergyConsumptionSensor",
            Self::SwitchSensor => "SwitchSensor",
            Self::SolarIrradianceSensor => "SolarIrradianceSensor",
        }
    }

    /// The unit this sensor type reports in
    #[must_use]
    pub const fn unit(&self) -> MeasurementUnit {
        match self {
            Self::TemperatureSensor | Self::DewPointSensor => MeasurementUnit::Celsius,
            Self::HumiditySensor | Self::PositionSensor => MeasurementUnit::Percent,
            Self::WindSensor => MeasurementUnit::KilometersPerHour,
            Self::SunsetSensor | Self::SunriseSensor => MeasurementUnit::Timestamp,
            Self::AveragePowerConsumptionSensor | Self::PowerConsumptionSensor => {
                MeasurementUnit::Watts
            }
            Self::EnergyConsumptionSensor => MeasurementUnit::WattHours,
            Self::SwitchSensor => MeasurementUnit::Binary,
            Self::SolarIrradianceSensor => MeasurementUnit::WattsPerSquareMeter,
        }
    }
}

impl fmt::Display for SensorTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorTypeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTypeName(s.to_string()))
    }
}

/// Which settings shape an actuator type accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsKind {
    None,
    Integer,
    Decimal,
}

/// The closed set of actuator types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActuatorTypeId {
    SwitchActuator,
    RollerBlindActuator,
    DecimalValueActuator,
    IntegerValueActuator,
}

impl ActuatorTypeId {
    /// Every known actuator type, in catalog order
    pub const ALL: [Self; 4] = [
        Self::SwitchActuator,
        Self::RollerBlindActuator,
        Self::DecimalValueActuator,
        Self::IntegerValueActuator,
    ];

    /// Canonical type name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SwitchActuator => "SwitchActuator",
            Self::RollerBlindActuator => "RollerBlindActuator",
            Self::DecimalValueActuator => "DecimalValueActuator",
            Self::IntegerValueActuator => "IntegerValueActuator",
        }
    }

    /// The settings shape this type requires
    #[must_use]
    pub const fn settings_kind(&self) -> SettingsKind {
        match self {
            Self::SwitchActuator | Self::RollerBlindActuator => SettingsKind::None,
            Self::DecimalValueActuator => SettingsKind::Decimal,
            Self::IntegerValueActuator => SettingsKind::Integer,
        }
    }

    /// Check a settings value against this type's required shape
    #[must_use]
    pub fn accepts(&self, settings: &ActuatorSettings) -> bool {
        matches!(
            (self.settings_kind(), settings),
            (SettingsKind::None, ActuatorSettings::None)
                | (SettingsKind::Integer, ActuatorSettings::Integer { .. })
                | (SettingsKind::Decimal, ActuatorSettings::Decimal { .. })
        )
    }
}

impl fmt::Display for ActuatorTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActuatorTypeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTypeName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_type_names_roundtrip() {
        for t in SensorTypeId::ALL {
            let parsed: SensorTypeId = t.as_str().parse().unwrap();
            assert_eq!(parsed, t);
        }
    }

    #[test]
    fn actuator_type_names_roundtrip() {
        for t in ActuatorTypeId::ALL {
            let parsed: ActuatorTypeId = t.as_str().parse().unwrap();
            assert_eq!(parsed, t);
        }
    }

    #[test]
    fn unknown_sensor_type_rejected() {
        let result: Result<SensorTypeId, _> = "PresenceSensor".parse();
        assert!(matches!(result, Err(DomainError::UnknownTypeName(_))));
    }

    #[test]
    fn unknown_actuator_type_rejected() {
        let result: Result<ActuatorTypeId, _> = "StringActuator".parse();
        assert!(result.is_err());
    }

    #[test]
    fn units_follow_the_variant() {
        assert_eq!(
            SensorTypeId::TemperatureSensor.unit(),
            MeasurementUnit::Celsius
        );
        assert_eq!(SensorTypeId::HumiditySensor.unit(), MeasurementUnit::Percent);
        assert_eq!(
            SensorTypeId::WindSensor.unit(),
            MeasurementUnit::KilometersPerHour
        );
        assert_eq!(SensorTypeId::SwitchSensor.unit(), MeasurementUnit::Binary);
    }

    #[test]
    fn switch_actuator_accepts_only_no_settings() {
        let none = ActuatorSettings::None;
        let integer = ActuatorSettings::integer(0, 1).unwrap();
        assert!(ActuatorTypeId::SwitchActuator.accepts(&none));
        assert!(!ActuatorTypeId::SwitchActuator.accepts(&integer));
    }

    #[test]
    fn range_actuators_require_their_shape() {
        let integer = ActuatorSettings::integer(0, 100).unwrap();
        let decimal = ActuatorSettings::decimal(0.0, 1.0, 0.1).unwrap();
        assert!(ActuatorTypeId::IntegerValueActuator.accepts(&integer));
        assert!(!ActuatorTypeId::IntegerValueActuator.accepts(&decimal));
        assert!(ActuatorTypeId::DecimalValueActuator.accepts(&decimal));
        assert!(!ActuatorTypeId::DecimalValueActuator.accepts(&ActuatorSettings::None));
    }
}
