//! Error types for songmeta-lookup HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::LookupError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// External search service failed (502)
    #[error("{0}")]
    Upstream(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            LookupError::Upstream { .. } => ApiError::Upstream(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SearchError;

    #[test]
    fn test_lookup_errors_map_to_status() {
        let not_found: ApiError = LookupError::NotFound {
            title: "Lithium".to_string(),
            artist: "Nirvana".to_string(),
        }
        .into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let upstream: ApiError = LookupError::Upstream {
            title: "Lithium".to_string(),
            artist: "Nirvana".to_string(),
            source: SearchError::RateLimitExceeded,
        }
        .into();
        assert_eq!(upstream.to_string(), "Song not found for title: Lithium, artist: Nirvana, external service error: Rate limit exceeded");
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
