//! Infrastructure layer
//!
//! Concrete adapters behind the application ports, plus process
//! configuration loading.

pub mod adapters;
pub mod config;

pub use adapters::{GmtZoneResolver, WeatherKitForecastAdapter};
pub use config::{AppConfig, ServerConfig};
