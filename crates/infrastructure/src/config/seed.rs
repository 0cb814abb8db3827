//! Seed data configuration

use serde::{Deserialize, Serialize};

/// Controls whether demo data is seeded at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Seed a default house, rooms and devices on startup
    #[serde(default)]
    pub demo_data: bool,
}
