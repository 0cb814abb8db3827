//! Value objects - immutable, identity-less, self-validating domain primitives
//!
//! Construction is the only validation point: once a value object exists, its
//! validity holds for its entire lifetime and no layer downstream re-checks
//! the raw input.

mod address;
mod device_status;
mod dimensions;
mod floor;
mod gps;
mod ids;
mod location;
mod names;
mod settings;
mod type_ids;

pub use address::{Address, City, Country, Door, PostalCode, Street};
pub use device_status::DeviceStatus;
pub use dimensions::{RoomDimensions, RoomHeight, RoomLength, RoomWidth};
pub use floor::RoomFloor;
pub use gps::{Gps, Latitude, Longitude};
pub use ids::{ActuatorId, DeviceId, HouseId, RoomId, SensorId};
pub use location::Location;
pub use names::{ActuatorName, DeviceModel, DeviceName, RoomName, SensorName};
pub use settings::ActuatorSettings;
pub use type_ids::{ActuatorTypeId, MeasurementUnit, SensorTypeId, SettingsKind};
