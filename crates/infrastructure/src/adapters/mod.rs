//! Port adapters
//!
//! Concrete implementations of the application ports.

mod forecast_adapter;
mod zone_adapter;

pub use forecast_adapter::WeatherKitForecastAdapter;
pub use zone_adapter::GmtZoneResolver;
