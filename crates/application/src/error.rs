//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (validation, settings mismatch, unknown type)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No house has been configured yet
    #[error("No house is configured")]
    HouseNotConfigured,

    /// A second house would violate the singleton invariant
    #[error("A house is already configured")]
    HouseAlreadyConfigured,

    /// An expected aggregate is absent
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Aggregate kind ("room", "device", ...)
        entity: &'static str,
        /// The identifier that failed to resolve
        id: String,
    },

    /// The device exists but is already inactive
    #[error("Device is already inactive: {0}")]
    DeviceInactive(String),

    /// The type name is valid but not registered in the catalog
    #[error("Type is not registered: {0}")]
    UnregisteredType(String),

    /// The repository refused the operation
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Create a not-found error
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
