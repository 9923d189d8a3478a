//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use pagesmith::error::Error;

/// Wrapper turning a pipeline [`Error`] into an HTTP response.
///
/// Bad input is the caller's fault (400); anything the model provider
/// did wrong is a bad gateway (502); everything else is a 500. The body
/// is always `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Authentication(_)
            | Error::RateLimit(_)
            | Error::Api(_)
            | Error::ApiFormat(_)
            | Error::Network(_)
            | Error::Timeout(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.0.to_string();
        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        } else {
            tracing::warn!(%status, error = %message, "request rejected");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(Error::invalid_input("empty")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(Error::authentication("bad key")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(Error::rate_limit("quota")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(Error::api("upstream 500")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(Error::api_format("no candidates")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(Error::other("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
