//! House location: postal address plus GPS coordinates

use serde::{Deserialize, Serialize};

use super::address::Address;
use super::gps::Gps;

/// Where a house sits: its address and its coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    address: Address,
    gps: Gps,
}

impl Location {
    /// Pair a validated address with validated coordinates
    #[must_use]
    pub const fn new(address: Address, gps: Gps) -> Self {
        Self { address, gps }
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub const fn gps(&self) -> Gps {
        self.gps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{City, Country, Door, PostalCode, Street};

    fn porto_location() -> Location {
        let address = Address::new(
            Door::new("1").unwrap(),
            Street::new("Rua de Santa Catarina").unwrap(),
            City::new("Porto").unwrap(),
            Country::Portugal,
            PostalCode::new(Country::Portugal, "PT-4000-009").unwrap(),
        )
        .unwrap();
        Location::new(address, Gps::from_degrees(41.14961, -8.61099).unwrap())
    }

    #[test]
    fn exposes_address_and_gps() {
        let location = porto_location();
        assert_eq!(location.address().city().as_str(), "Porto");
        assert!((location.gps().latitude() - 41.14961).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_roundtrip() {
        let location = porto_location();
        let json = serde_json::to_string(&location).unwrap();
        let parsed: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, location);
    }
}
