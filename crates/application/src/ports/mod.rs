//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod forecast_port;
mod zone_port;

#[cfg(test)]
pub use forecast_port::MockForecastProviderPort;
pub use forecast_port::{ForecastProviderPort, HourlyForecast, HourlyForecastRequest, ProviderHour};
#[cfg(test)]
pub use zone_port::MockZoneResolverPort;
pub use zone_port::ZoneResolverPort;
