//! Dark Sky response schema
//!
//! The hourly subset of the legacy Dark Sky forecast JSON shape. Field
//! names follow the Dark Sky wire format (camelCase plus the
//! `nearest-station` flag), so serde renames are load-bearing here.

use serde::{Deserialize, Serialize};

/// Timezone reported when the zone resolver has no answer.
pub const FALLBACK_ZONE: &str = "Etc/GMT";

/// Placeholder distance for the `nearest-station` flag; the upstream
/// provider has no station concept. An integer so the flag serializes
/// as `5`, matching the legacy wire output byte for byte.
pub const NEAREST_STATION_PLACEHOLDER: i64 = 5;

/// Top-level forecast response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub hourly: HourlyBlock,
    pub flags: Flags,
    pub offset: f64,
}

/// The hourly data block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBlock {
    pub summary: String,
    pub icon: String,
    pub data: Vec<HourlyPoint>,
}

/// One hour of forecast data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPoint {
    /// Unix epoch seconds of the start of the hour
    pub time: i64,
    /// The provider's raw condition code, passed through verbatim
    pub summary: String,
    pub icon: String,
    pub daylight: bool,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_trend: Option<String>,
    pub precip_intensity: f64,
    pub precip_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precip_type: Option<String>,
    pub apparent_temperature: f64,
    pub dew_point: f64,
    pub wind_speed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    pub wind_bearing: i64,
    pub cloud_cover: f64,
    pub uv_index: i64,
    pub visibility: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snowfall_intensity: Option<f64>,
    /// Always `null`: the provider supplies no ozone data but the
    /// schema requires the field.
    pub ozone: Option<f64>,
}

/// Metadata flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    /// Attribution URLs for the data sources
    pub sources: Vec<String>,
    #[serde(rename = "nearest-station")]
    pub nearest_station: i64,
    /// Unit system identifier, e.g. `si`
    pub units: String,
}
