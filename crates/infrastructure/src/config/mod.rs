//! Application configuration
//!
//! Loaded from an optional `config` file, then overridden by
//! `SKYBRIDGE_`-prefixed environment variables. Nesting uses a double
//! underscore so field names may themselves contain underscores
//! (e.g. `SKYBRIDGE_SERVER__PORT`, `SKYBRIDGE_WEATHERKIT__KEY_ID`).

mod server;

use integration_weatherkit::WeatherKitConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// WeatherKit credentials and endpoint settings
    #[serde(default)]
    pub weatherkit: WeatherKitConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value fails to
    /// deserialize into the expected type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(environment_source());

        let config = builder.build()?;
        config.try_deserialize()
    }
}

/// Environment-variable source with `SKYBRIDGE_` prefix and `__` as
/// the nesting separator, so `weatherkit.key_id` stays addressable as
/// `SKYBRIDGE_WEATHERKIT__KEY_ID` rather than splitting into
/// `weatherkit.key.id`.
fn environment_source() -> config::Environment {
    config::Environment::with_prefix("SKYBRIDGE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
