//! WeatherKit client configuration
//!
//! All four credential fields come from process configuration; a
//! missing or malformed signing key is a configuration failure, not a
//! request-level error.

use serde::{Deserialize, Serialize};

/// WeatherKit service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherKitConfig {
    /// WeatherKit REST base URL (default: <https://weatherkit.apple.com>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Base64-encoded PKCS#8 P-256 private key PEM
    #[serde(default)]
    pub key: String,

    /// Developer team identifier (`iss` claim)
    #[serde(default)]
    pub issuer: String,

    /// Service identifier (`sub` claim), e.g. `com.example.weather-client`
    #[serde(default)]
    pub subject: String,

    /// Identifier of the signing key (`kid` header)
    #[serde(default)]
    pub key_id: String,
}

fn default_base_url() -> String {
    "https://weatherkit.apple.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherKitConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            key: String::new(),
            issuer: String::new(),
            subject: String::new(),
            key_id: String::new(),
        }
    }
}
