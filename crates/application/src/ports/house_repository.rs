//! House storage port
//!
//! The house is a singleton aggregate: the port makes the invariant explicit
//! instead of relying on first-row retrieval. `save_singleton` refuses a
//! second house; `replace` updates the one that exists.

use async_trait::async_trait;
use domain::entities::House;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the singleton house aggregate
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HouseRepository: Send + Sync {
    /// Store the house
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::HouseAlreadyConfigured`] when a house is
    /// already stored.
    async fn save_singleton(&self, house: &House) -> Result<(), ApplicationError>;

    /// The configured house, if any
    async fn get_singleton(&self) -> Result<Option<House>, ApplicationError>;

    /// Overwrite the stored house with the same identity
    ///
    /// Returns `false` when no house with that identity is stored; nothing
    /// is written in that case.
    async fn replace(&self, house: &House) -> Result<bool, ApplicationError>;

    /// Whether a house is configured
    async fn exists(&self) -> Result<bool, ApplicationError>;
}
