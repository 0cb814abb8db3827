//! Postal address value objects
//!
//! The country is a closed enumeration and the postal code is validated
//! against the country's own pattern at construction. A mismatched pair can
//! never exist.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

use super::names::define_name;

define_name!(
    /// Door designation ("12", "3B")
    Door,
    "door"
);

define_name!(
    /// Street name
    Street,
    "street"
);

define_name!(
    /// City name
    City,
    "city"
);

/// Countries a house can be located in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Portugal,
    #[serde(rename = "USA")]
    Usa,
    Spain,
    France,
}

// Patterns are literals; compilation cannot fail at runtime.
#[allow(clippy::unwrap_used)]
static PT_POSTAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^PT-\d{4}-\d{3}$").unwrap());
#[allow(clippy::unwrap_used)]
static US_POSTAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^US-\d{5}$").unwrap());
#[allow(clippy::unwrap_used)]
static ES_POSTAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ES-\d{5}$").unwrap());
#[allow(clippy::unwrap_used)]
static FR_POSTAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^FR-\d{5}$").unwrap());

impl Country {
    /// Human-readable country name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Portugal => "Portugal",
            Self::Usa => "USA",
            Self::Spain => "Spain",
            Self::France => "France",
        }
    }

    /// The postal-code pattern this country requires
    fn postal_pattern(&self) -> &'static Regex {
        match self {
            Self::Portugal => &PT_POSTAL,
            Self::Usa => &US_POSTAL,
            Self::Spain => &ES_POSTAL,
            Self::France => &FR_POSTAL,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Portugal" => Ok(Self::Portugal),
            "USA" => Ok(Self::Usa),
            "Spain" => Ok(Self::Spain),
            "France" => Ok(Self::France),
            other => Err(DomainError::UnknownCountry(other.to_string())),
        }
    }
}

/// A postal code, valid for exactly one country
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Validate a raw code against the country's pattern
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPostalCode`] when the code does not
    /// match the country's format (e.g. `PT-4000-009` for Portugal).
    pub fn new(country: Country, code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if country.postal_pattern().is_match(&code) {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidPostalCode {
                country: country.as_str().to_string(),
                code,
            })
        }
    }

    /// Access the inner code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A full postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    door: Door,
    street: Street,
    city: City,
    country: Country,
    postal_code: PostalCode,
}

impl Address {
    /// Compose an address from validated parts
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPostalCode`] when the postal code was
    /// constructed for a different country.
    pub fn new(
        door: Door,
        street: Street,
        city: City,
        country: Country,
        postal_code: PostalCode,
    ) -> Result<Self, DomainError> {
        // A PostalCode is only proof of validity for the country it was
        // built with; re-check when the pair is assembled.
        if !country.postal_pattern().is_match(postal_code.as_str()) {
            return Err(DomainError::InvalidPostalCode {
                country: country.as_str().to_string(),
                code: postal_code.as_str().to_string(),
            });
        }
        Ok(Self {
            door,
            street,
            city,
            country,
            postal_code,
        })
    }

    #[must_use]
    pub fn door(&self) -> &Door {
        &self.door
    }

    #[must_use]
    pub fn street(&self) -> &Street {
        &self.street
    }

    #[must_use]
    pub fn city(&self) -> &City {
        &self.city
    }

    #[must_use]
    pub const fn country(&self) -> Country {
        self.country
    }

    #[must_use]
    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address_parts() -> (Door, Street, City) {
        (
            Door::new("1").unwrap(),
            Street::new("Rua de Santa Catarina").unwrap(),
            City::new("Porto").unwrap(),
        )
    }

    #[test]
    fn portuguese_postal_code_accepted() {
        let code = PostalCode::new(Country::Portugal, "PT-4000-009").unwrap();
        assert_eq!(code.as_str(), "PT-4000-009");
    }

    #[test]
    fn postal_code_with_wrong_shape_rejected() {
        assert!(PostalCode::new(Country::Portugal, "PT-40-009").is_err());
        assert!(PostalCode::new(Country::Portugal, "4000-009").is_err());
        assert!(PostalCode::new(Country::Portugal, "").is_err());
    }

    #[test]
    fn postal_code_for_other_country_rejected() {
        // US prefix, validated as Portugal
        assert!(PostalCode::new(Country::Portugal, "US-12345").is_err());
        assert!(PostalCode::new(Country::Usa, "US-12345").is_ok());
    }

    #[test]
    fn each_country_has_its_own_pattern() {
        assert!(PostalCode::new(Country::Spain, "ES-28001").is_ok());
        assert!(PostalCode::new(Country::France, "FR-75001").is_ok());
        assert!(PostalCode::new(Country::Usa, "US-1234").is_err());
        assert!(PostalCode::new(Country::France, "FR-7500").is_err());
    }

    #[test]
    fn unknown_country_name_rejected() {
        let result: Result<Country, _> = "Germany".parse();
        assert!(matches!(result, Err(DomainError::UnknownCountry(_))));
    }

    #[test]
    fn country_roundtrips_through_from_str() {
        for name in ["Portugal", "USA", "Spain", "France"] {
            let country: Country = name.parse().unwrap();
            assert_eq!(country.as_str(), name);
        }
    }

    #[test]
    fn address_composes_matching_pair() {
        let (door, street, city) = address_parts();
        let code = PostalCode::new(Country::Portugal, "PT-4000-009").unwrap();
        let address = Address::new(door, street, city, Country::Portugal, code).unwrap();
        assert_eq!(address.city().as_str(), "Porto");
        assert_eq!(address.country(), Country::Portugal);
    }

    #[test]
    fn address_rejects_mismatched_pair() {
        let (door, street, city) = address_parts();
        let code = PostalCode::new(Country::Usa, "US-12345").unwrap();
        let result = Address::new(door, street, city, Country::Portugal, code);
        assert!(matches!(
            result,
            Err(DomainError::InvalidPostalCode { .. })
        ));
    }

    #[test]
    fn blank_door_rejected() {
        assert!(Door::new(" ").is_err());
    }

    #[test]
    fn address_serde_roundtrip() {
        let (door, street, city) = address_parts();
        let code = PostalCode::new(Country::Portugal, "PT-4000-009").unwrap();
        let address = Address::new(door, street, city, Country::Portugal, code).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        let parsed: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, address);
    }
}
