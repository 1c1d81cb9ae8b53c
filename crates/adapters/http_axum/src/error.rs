//! HTTP error response mapping.
//!
//! Every failure leaves the handler as a JSON body with a non-2xx status.
//! Handler errors use `{"success": false, "error": …}`; the 405 body is
//! `{"error": "Method not allowed"}`.

use axum::Json;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use spatialhub_domain::error::SpatialError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// Bare error body, used where clients only look at `error`.
#[derive(Serialize)]
struct BareErrorBody {
    error: &'static str,
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Error raised by the domain or application layer.
    Domain(SpatialError),
    /// The request body could not be parsed as JSON.
    InvalidJson,
    /// The request body is valid JSON but not an object.
    NotAnObject,
    /// The request body could not be read at all, e.g. it is too large.
    Body(BytesRejection),
    /// The query string could not be deserialized.
    Query(QueryRejection),
    /// No handler for this method on an existing route.
    MethodNotAllowed,
    /// No route matches the request path.
    RouteNotFound,
}

impl From<SpatialError> for ApiError {
    fn from(err: SpatialError) -> Self {
        Self::Domain(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Query(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(SpatialError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(SpatialError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(SpatialError::Storage(err)) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::InvalidJson => (StatusCode::BAD_REQUEST, "Invalid JSON format".to_string()),
            Self::NotAnObject => (
                StatusCode::BAD_REQUEST,
                "Request body must be a JSON object".to_string(),
            ),
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
            Self::Query(rejection) => (rejection.status(), rejection.body_text()),
            Self::MethodNotAllowed => {
                let body = BareErrorBody {
                    error: "Method not allowed",
                };
                return (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response();
            }
            Self::RouteNotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}
