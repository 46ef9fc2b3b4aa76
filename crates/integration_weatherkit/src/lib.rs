//! Apple WeatherKit REST integration
//!
//! Client for the WeatherKit hourly-forecast endpoint. Every outbound
//! request carries a freshly minted ES256 bearer token; tokens are
//! short-lived by design and never reused across requests.

pub mod client;
pub mod config;
mod models;
pub mod token;

pub use client::{HourlyQuery, WeatherKitClient, WeatherKitError};
pub use config::WeatherKitConfig;
pub use models::{ForecastHourly, HourWeatherConditions, Metadata, WeatherKitResponse};
pub use token::TokenMinter;
