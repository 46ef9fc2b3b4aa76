//! Forecast provider port
//!
//! Defines the interface for fetching upstream hourly forecast data,
//! plus the provider-agnostic payload shape the translator consumes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Parameters of one upstream hourly-forecast fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyForecastRequest {
    /// Response language, e.g. `en`
    pub language: String,
    /// Latitude as the raw decimal string from the request path
    pub latitude: String,
    /// Longitude as the raw decimal string from the request path
    pub longitude: String,
    /// Start of the local-day window (UTC)
    pub start: DateTime<Utc>,
    /// End of the local-day window (UTC)
    pub end: DateTime<Utc>,
    /// Resolved zone identifier; omitted from the upstream query when unresolved
    pub zone: Option<String>,
}

/// Upstream hourly forecast payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Latitude echoed by the provider's metadata
    pub latitude: f64,
    /// Longitude echoed by the provider's metadata
    pub longitude: f64,
    /// The provider's attribution URL
    pub attribution_url: String,
    /// Unit system token as reported by the provider (e.g. `m`)
    pub units: String,
    /// One record per forecast hour
    pub hours: Vec<ProviderHour>,
}

/// One hour of provider forecast data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderHour {
    /// Start of the forecast hour (UTC)
    pub forecast_start: DateTime<Utc>,
    /// The provider's enumerated condition code, e.g. `partlyCloudy`
    pub condition_code: String,
    /// Whether the hour falls between sunrise and sunset
    pub daylight: bool,
    pub temperature: f64,
    pub temperature_apparent: f64,
    pub temperature_dew_point: f64,
    /// Relative humidity as a fraction (0-1)
    pub humidity: f64,
    /// Sea-level pressure in mbar
    pub pressure: f64,
    pub pressure_trend: Option<String>,
    pub precipitation_intensity: f64,
    /// Chance of precipitation as a fraction (0-1)
    pub precipitation_chance: f64,
    pub precipitation_type: Option<String>,
    pub wind_speed: f64,
    pub wind_gust: Option<f64>,
    /// Wind direction in degrees
    pub wind_direction: i64,
    /// Cloud cover as a fraction (0-1)
    pub cloud_cover: f64,
    pub uv_index: i64,
    pub visibility: f64,
    pub snowfall_intensity: Option<f64>,
}

/// Port for upstream forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastProviderPort: Send + Sync {
    /// Fetch hourly forecast data for the given window.
    ///
    /// Implementations must mint a fresh upstream token per call and
    /// must not cache results across requests.
    async fn hourly_forecast(
        &self,
        request: &HourlyForecastRequest,
    ) -> Result<HourlyForecast, ApplicationError>;
}
