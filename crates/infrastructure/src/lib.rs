//! Infrastructure layer - adapters for the application ports
//!
//! In-memory repository implementations, configuration loading, and the
//! bootstrap wiring that assembles repositories and services into a running
//! system.

pub mod bootstrap;
pub mod config;
pub mod persistence;

pub use bootstrap::{Bootstrap, seed_demo_data};
pub use config::{AppConfig, CatalogConfig, SeedConfig, ServerConfig};
pub use persistence::{
    InMemoryActuatorStore, InMemoryActuatorTypeStore, InMemoryDeviceStore, InMemoryHouseStore,
    InMemoryRoomStore, InMemorySensorStore, InMemorySensorTypeStore,
};
