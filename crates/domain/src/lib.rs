//! Domain layer for Skybridge
//!
//! Pure request/response model for the forecast adapter: path-slug
//! parsing, local-day windowing, the Dark Sky response schema, and the
//! condition-code icon table. No I/O and no async.

pub mod darksky;
pub mod day_window;
pub mod errors;
pub mod forecast_query;
pub mod icon;

pub use darksky::{
    FALLBACK_ZONE, Flags, ForecastResponse, HourlyBlock, HourlyPoint, NEAREST_STATION_PLACEHOLDER,
};
pub use day_window::LocalDayWindow;
pub use errors::DomainError;
pub use forecast_query::{DEFAULT_LANGUAGE, ForecastQuery};
pub use icon::icon_for;
