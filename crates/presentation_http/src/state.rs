//! Application state shared across handlers

use std::sync::Arc;

use application::ForecastService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Forecast service driving one request end to end
    pub forecast_service: Arc<ForecastService>,
}
