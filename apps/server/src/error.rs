use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cotacao_core::Error;

/// Maps core errors onto the only two failure signals this API produces:
/// 503 when the pre-flight deadline check trips, 500 for fetch failures.
///
/// Persistence errors never reach this type; they are swallowed and logged
/// after the response is committed.
pub struct ApiError(Error);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::DeadlineExceeded => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("request failed: {}", self.0);
        let reason = status.canonical_reason().unwrap_or("error");
        (status, reason.to_string()).into_response()
    }
}
