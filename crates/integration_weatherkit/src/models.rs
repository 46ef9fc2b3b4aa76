//! WeatherKit REST payload models
//!
//! Types for the `dataSets=forecastHourly` response. Consumed
//! read-only; the adapter maps them field by field and discards them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level WeatherKit response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherKitResponse {
    pub forecast_hourly: ForecastHourly,
}

/// The hourly forecast data set
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastHourly {
    pub metadata: Metadata,
    pub hours: Vec<HourWeatherConditions>,
}

/// Data-set metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "attributionURL", alias = "attributionUrl")]
    pub attribution_url: String,
    pub units: String,
}

/// One forecast hour
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourWeatherConditions {
    pub forecast_start: DateTime<Utc>,
    pub condition_code: String,
    #[serde(default)]
    pub daylight: bool,
    pub temperature: f64,
    pub temperature_apparent: f64,
    pub temperature_dew_point: f64,
    pub humidity: f64,
    pub pressure: f64,
    #[serde(default)]
    pub pressure_trend: Option<String>,
    #[serde(default)]
    pub precipitation_intensity: f64,
    #[serde(default)]
    pub precipitation_chance: f64,
    #[serde(default)]
    pub precipitation_type: Option<String>,
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_gust: Option<f64>,
    pub wind_direction: i64,
    pub cloud_cover: f64,
    pub uv_index: i64,
    pub visibility: f64,
    #[serde(default)]
    pub snowfall_intensity: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "forecastHourly": {
                "metadata": {
                    "attributionURL": "https://developer.apple.com/weatherkit/data-source-attribution/",
                    "latitude": 40.7,
                    "longitude": -74.0,
                    "units": "m"
                },
                "hours": [
                    {
                        "forecastStart": "2023-11-14T22:00:00Z",
                        "conditionCode": "MostlyClear",
                        "daylight": true,
                        "temperature": 12.1,
                        "temperatureApparent": 11.2,
                        "temperatureDewPoint": 4.6,
                        "humidity": 0.6,
                        "pressure": 1022.1,
                        "pressureTrend": "rising",
                        "precipitationIntensity": 0.0,
                        "precipitationChance": 0.0,
                        "precipitationType": "clear",
                        "windSpeed": 9.3,
                        "windGust": 16.2,
                        "windDirection": 297,
                        "cloudCover": 0.2,
                        "uvIndex": 1,
                        "visibility": 33021.5,
                        "snowfallIntensity": 0.0
                    }
                ]
            }
        }"#
    }

    #[test]
    fn parses_full_response() {
        let response: WeatherKitResponse = serde_json::from_str(sample_json()).unwrap();
        let metadata = &response.forecast_hourly.metadata;
        assert!((metadata.latitude - 40.7).abs() < f64::EPSILON);
        assert_eq!(metadata.units, "m");
        let hour = &response.forecast_hourly.hours[0];
        assert_eq!(hour.condition_code, "MostlyClear");
        assert!(hour.daylight);
        assert_eq!(hour.forecast_start.timestamp(), 1_699_999_200);
        assert_eq!(hour.wind_gust, Some(16.2));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let json = r#"{
            "forecastStart": "2023-11-14T22:00:00Z",
            "conditionCode": "clear",
            "daylight": false,
            "temperature": 1.0,
            "temperatureApparent": 0.0,
            "temperatureDewPoint": -2.0,
            "humidity": 0.5,
            "pressure": 1000.0,
            "windSpeed": 3.0,
            "windDirection": 10,
            "cloudCover": 0.0,
            "uvIndex": 0,
            "visibility": 10000.0
        }"#;
        let hour: HourWeatherConditions = serde_json::from_str(json).unwrap();
        assert!(hour.wind_gust.is_none());
        assert!(hour.snowfall_intensity.is_none());
        assert!(hour.pressure_trend.is_none());
        assert!(hour.precipitation_type.is_none());
        assert!((hour.precipitation_intensity).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_lowercase_attribution_url_spelling() {
        let json = r#"{
            "attributionUrl": "https://example.com/legal",
            "latitude": 1.0,
            "longitude": 2.0,
            "units": "m"
        }"#;
        let metadata: Metadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.attribution_url, "https://example.com/legal");
    }
}
