//! API error handling
//!
//! Every error carries the legacy wire contract: client-input problems
//! answer with a small JSON `detail` body and a 10-second shared-cache
//! TTL, upstream statuses are forwarded verbatim with an empty body,
//! and anything unexpected collapses to a bare 500.

use application::ApplicationError;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Cache-Control for error responses a shared cache may hold briefly.
pub const CACHE_SHORT: &str = "s-maxage=10";

/// Cache-Control for responses that must be revalidated immediately.
pub const CACHE_REVALIDATE: &str = "max-age=0";

/// API error types with their HTTP representations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request path matched no route
    #[error("Not found")]
    NotFound,

    /// Caller supplied an unusable coordinate slug
    #[error("{0}")]
    BadRequest(String),

    /// Upstream answered with a non-success status
    #[error("upstream status {0}")]
    Upstream(u16),

    /// Anything else: signing, transport, parse, bad configuration
    #[error("internal error")]
    Internal,
}

impl From<domain::DomainError> for ApiError {
    fn from(err: domain::DomainError) -> Self {
        if err.is_client_input() {
            Self::BadRequest(err.to_string())
        } else {
            error!(error = %err, "Request failed");
            Self::Internal
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(domain_err) if domain_err.is_client_input() => {
                Self::BadRequest(domain_err.to_string())
            }
            ApplicationError::UpstreamStatus(status) => Self::Upstream(status),
            other => {
                error!(error = %other, "Request failed");
                Self::Internal
            }
        }
    }
}

fn json_detail(status: StatusCode, cache: &'static str, detail: &str) -> Response {
    let body = serde_json::json!({ "detail": detail }).to_string();
    (
        status,
        [
            (header::CACHE_CONTROL, HeaderValue::from_static(cache)),
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ),
        ],
        body,
    )
        .into_response()
}

fn empty(status: StatusCode, cache: &'static str) -> Response {
    (
        status,
        [(header::CACHE_CONTROL, HeaderValue::from_static(cache))],
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => json_detail(StatusCode::NOT_FOUND, CACHE_SHORT, "Not found"),
            Self::BadRequest(detail) => {
                json_detail(StatusCode::BAD_REQUEST, CACHE_SHORT, &detail)
            }
            Self::Upstream(status) => empty(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                CACHE_REVALIDATE,
            ),
            Self::Internal => empty(StatusCode::INTERNAL_SERVER_ERROR, CACHE_SHORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::DomainError;

    fn cache_header(response: &Response) -> &str {
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[test]
    fn not_found_shape() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(cache_header(&response), "s-maxage=10");
    }

    #[test]
    fn bad_request_carries_detail() {
        let response = ApiError::BadRequest("Not enough arguments".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(cache_header(&response), "s-maxage=10");
    }

    #[test]
    fn upstream_status_is_forwarded() {
        let response = ApiError::Upstream(401).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(cache_header(&response), "max-age=0");
    }

    #[test]
    fn internal_is_bare_500() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(cache_header(&response), "s-maxage=10");
    }

    #[test]
    fn client_input_domain_errors_become_bad_request() {
        let err = ApiError::from(ApplicationError::Domain(DomainError::InvalidTimeParameter));
        assert!(matches!(err, ApiError::BadRequest(d) if d == "Invalid time parameter"));
    }

    #[test]
    fn upstream_application_errors_are_forwarded() {
        let err = ApiError::from(ApplicationError::UpstreamStatus(503));
        assert!(matches!(err, ApiError::Upstream(503)));
    }

    #[test]
    fn everything_else_is_internal() {
        let err = ApiError::from(ApplicationError::ExternalService("boom".into()));
        assert!(matches!(err, ApiError::Internal));
    }
}
