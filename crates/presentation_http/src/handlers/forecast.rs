//! Forecast handler
//!
//! `GET /forecast/{lat},{lon},{time}[?lang=xx]` in the legacy wire
//! shape: the three values share one path segment, comma-separated.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use domain::{ForecastQuery, ForecastResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ApiError, CACHE_REVALIDATE};
use crate::state::AppState;

/// Optional query-string parameters
#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    /// BCP 47 language tag forwarded upstream (default: `en`)
    pub lang: Option<String>,
}

/// Serve a translated local-day forecast for a coordinate slug
#[instrument(skip(state, params), fields(slug = %slug))]
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<ForecastParams>,
) -> Result<Response, ApiError> {
    let query = ForecastQuery::from_path_slug(&slug, params.lang.as_deref())?;
    let forecast = state.forecast_service.local_day_forecast(&query).await?;
    Ok(success(forecast))
}

fn success(forecast: ForecastResponse) -> Response {
    (
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_REVALIDATE),
        )],
        Json(forecast),
    )
        .into_response()
}
