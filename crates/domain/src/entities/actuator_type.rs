//! ActuatorType - read-only catalog entry

use serde::{Deserialize, Serialize};

use crate::value_objects::{ActuatorTypeId, SettingsKind};

/// A registered actuator type
///
/// Reference data, registered once at startup from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorType {
    pub id: ActuatorTypeId,
}

impl ActuatorType {
    #[must_use]
    pub const fn new(id: ActuatorTypeId) -> Self {
        Self { id }
    }

    /// The settings shape this type requires of its actuators
    #[must_use]
    pub const fn settings_kind(&self) -> SettingsKind {
        self.id.settings_kind()
    }
}

impl From<ActuatorTypeId> for ActuatorType {
    fn from(id: ActuatorTypeId) -> Self {
        Self::new(id)
    }
}
