//! Route definitions

use axum::{Router, routing::get};

use crate::{error::ApiError, handlers, state::AppState};

/// Create the main router with all routes
///
/// Anything that matches no route, including `/forecast` with no
/// coordinate segment, answers with the legacy 404 body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/forecast/{coordinates}", get(handlers::forecast::get_forecast))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
