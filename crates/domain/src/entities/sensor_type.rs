//! SensorType - read-only catalog entry

use serde::{Deserialize, Serialize};

use crate::value_objects::{MeasurementUnit, SensorTypeId};

/// A registered sensor type and the unit it reports in
///
/// Reference data: registered once at startup from configuration, never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorType {
    pub id: SensorTypeId,
    pub unit: MeasurementUnit,
}

impl SensorType {
    /// Build the catalog entry for a type; the unit comes from the variant
    #[must_use]
    pub const fn new(id: SensorTypeId) -> Self {
        Self {
            id,
            unit: id.unit(),
        }
    }
}

impl From<SensorTypeId> for SensorType {
    fn from(id: SensorTypeId) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_is_derived_from_the_variant() {
        let entry = SensorType::new(SensorTypeId::WindSensor);
        assert_eq!(entry.unit, MeasurementUnit::KilometersPerHour);
    }

    #[test]
    fn every_known_type_builds_an_entry() {
        for id in SensorTypeId::ALL {
            assert_eq!(SensorType::new(id).id, id);
        }
    }
}
