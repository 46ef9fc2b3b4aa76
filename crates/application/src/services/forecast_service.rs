//! Forecast orchestration
//!
//! Drives one forecast request end to end: resolve the zone and its
//! offset, compute the local-day window, fetch the upstream hours and
//! translate them. Stateless across requests; the only suspension
//! point is the upstream fetch.

use std::sync::Arc;

use domain::{FALLBACK_ZONE, ForecastQuery, ForecastResponse, LocalDayWindow};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{ForecastProviderPort, HourlyForecastRequest, ZoneResolverPort},
    translator::translate,
};

/// Service producing Dark Sky forecasts from the upstream provider
#[derive(Clone)]
pub struct ForecastService {
    provider: Arc<dyn ForecastProviderPort>,
    zones: Arc<dyn ZoneResolverPort>,
}

impl std::fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastService")
            .field("provider", &"<ForecastProviderPort>")
            .field("zones", &"<ZoneResolverPort>")
            .finish()
    }
}

impl ForecastService {
    /// Create a new service over the given ports
    #[must_use]
    pub fn new(provider: Arc<dyn ForecastProviderPort>, zones: Arc<dyn ZoneResolverPort>) -> Self {
        Self { provider, zones }
    }

    /// Produce the Dark Sky hourly forecast for the local day containing
    /// the queried instant.
    ///
    /// # Errors
    ///
    /// Propagates window-construction failures, upstream statuses and
    /// transport errors; the HTTP layer maps each onto the response
    /// contract.
    #[instrument(skip(self), fields(lat = %query.latitude(), lon = %query.longitude()))]
    pub async fn local_day_forecast(
        &self,
        query: &ForecastQuery,
    ) -> Result<ForecastResponse, ApplicationError> {
        let zone = match (query.latitude_degrees(), query.longitude_degrees()) {
            (Some(lat), Some(lon)) => self.zones.zone_name(lat, lon),
            _ => None,
        };
        let offset_hours = zone
            .as_deref()
            .and_then(|z| self.zones.utc_offset_hours(z))
            .unwrap_or(0.0);

        let window = LocalDayWindow::containing(query.start(), offset_hours)?;
        debug!(
            zone = zone.as_deref().unwrap_or(FALLBACK_ZONE),
            offset_hours,
            start = %window.start(),
            end = %window.end(),
            "resolved local-day window"
        );

        let request = HourlyForecastRequest {
            language: query.language().to_string(),
            latitude: query.latitude().to_string(),
            longitude: query.longitude().to_string(),
            start: window.start(),
            end: window.end(),
            zone: zone.clone(),
        };
        let payload = self.provider.hourly_forecast(&request).await?;

        Ok(translate(
            &payload,
            zone.as_deref().unwrap_or(FALLBACK_ZONE),
            offset_hours,
        ))
    }
}
