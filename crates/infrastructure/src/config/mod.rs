//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `catalog`: enabled sensor/actuator types
//! - `seed`: startup demo data
//!
//! Loaded from defaults, an optional `config.toml`, and `SMARTNEST_*`
//! environment variables, in that precedence order.

mod catalog;
mod seed;
mod server;

use serde::{Deserialize, Serialize};

pub use catalog::CatalogConfig;
pub use seed::SeedConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Type catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Seed data settings
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., SMARTNEST_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("SMARTNEST")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert!(!config.seed.demo_data);
        assert!(!config.catalog.sensor_types.is_empty());
    }

    #[test]
    fn deserializes_from_empty_document() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server":{"port":8080},"seed":{"demo_data":true}}"#).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.seed.demo_data);
    }
}
