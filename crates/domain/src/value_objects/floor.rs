//! Room floor value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// The floor a room sits on; negative values are basements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomFloor(i32);

impl RoomFloor {
    /// Any signed integer is a valid floor
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for RoomFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i32> for RoomFloor {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
