//! Forecast adapter - implements `ForecastProviderPort` using
//! `integration_weatherkit`

use application::error::ApplicationError;
use application::ports::{
    ForecastProviderPort, HourlyForecast, HourlyForecastRequest, ProviderHour,
};
use async_trait::async_trait;
use integration_weatherkit::{
    HourWeatherConditions, HourlyQuery, WeatherKitClient, WeatherKitConfig, WeatherKitError,
};
use tracing::instrument;

/// Adapter for hourly forecasts backed by Apple WeatherKit
pub struct WeatherKitForecastAdapter {
    client: WeatherKitClient,
}

impl std::fmt::Debug for WeatherKitForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherKitForecastAdapter")
            .field("client", &"WeatherKitClient")
            .finish()
    }
}

impl WeatherKitForecastAdapter {
    /// Create an adapter from WeatherKit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the signing key is unusable or the HTTP
    /// client fails to initialize.
    pub fn new(config: WeatherKitConfig) -> Result<Self, ApplicationError> {
        let client = WeatherKitClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration errors to application errors
    fn map_error(err: WeatherKitError) -> ApplicationError {
        match err {
            WeatherKitError::Configuration(msg) => ApplicationError::Configuration(msg),
            WeatherKitError::Status(status) => ApplicationError::UpstreamStatus(status),
            WeatherKitError::ConnectionFailed(msg) | WeatherKitError::RequestFailed(msg) => {
                ApplicationError::ExternalService(msg)
            }
            WeatherKitError::ParseError(msg) => ApplicationError::Internal(msg),
        }
    }

    fn map_hour(hour: HourWeatherConditions) -> ProviderHour {
        ProviderHour {
            forecast_start: hour.forecast_start,
            condition_code: hour.condition_code,
            daylight: hour.daylight,
            temperature: hour.temperature,
            temperature_apparent: hour.temperature_apparent,
            temperature_dew_point: hour.temperature_dew_point,
            humidity: hour.humidity,
            pressure: hour.pressure,
            pressure_trend: hour.pressure_trend,
            precipitation_intensity: hour.precipitation_intensity,
            precipitation_chance: hour.precipitation_chance,
            precipitation_type: hour.precipitation_type,
            wind_speed: hour.wind_speed,
            wind_gust: hour.wind_gust,
            wind_direction: hour.wind_direction,
            cloud_cover: hour.cloud_cover,
            uv_index: hour.uv_index,
            visibility: hour.visibility,
            snowfall_intensity: hour.snowfall_intensity,
        }
    }
}

#[async_trait]
impl ForecastProviderPort for WeatherKitForecastAdapter {
    #[instrument(skip(self, request), fields(lat = %request.latitude, lon = %request.longitude))]
    async fn hourly_forecast(
        &self,
        request: &HourlyForecastRequest,
    ) -> Result<HourlyForecast, ApplicationError> {
        let query = HourlyQuery {
            language: request.language.clone(),
            latitude: request.latitude.clone(),
            longitude: request.longitude.clone(),
            start: request.start,
            end: request.end,
            zone: request.zone.clone(),
        };

        let response = self
            .client
            .hourly_forecast(&query)
            .await
            .map_err(Self::map_error)?;

        let hourly = response.forecast_hourly;
        Ok(HourlyForecast {
            latitude: hourly.metadata.latitude,
            longitude: hourly.metadata.longitude,
            attribution_url: hourly.metadata.attribution_url,
            units: hourly.metadata.units,
            hours: hourly.hours.into_iter().map(Self::map_hour).collect(),
        })
    }
}
