//! Application layer - Use cases and orchestration
//!
//! Defines the ports the forecast adapter needs from the outside world
//! and the `ForecastService` that drives one request: resolve the zone,
//! compute the local-day window, fetch upstream hours, translate.

pub mod error;
pub mod ports;
pub mod services;
pub mod translator;

pub use error::ApplicationError;
pub use ports::*;
pub use services::ForecastService;
pub use translator::translate;
