//! HTTP presentation layer
//!
//! Axum server exposing the legacy forecast wire contract on top of
//! the application services.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
