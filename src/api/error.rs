//! Error responses for the HTTP layer.
//!
//! Bridges store errors to HTTP status codes and the JSON bodies the
//! client expects, via Axum's `IntoResponse` trait.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Short human-readable error.
    error: String,

    /// Field-level validation messages, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,

    /// One-line failure summary for server errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    details: Option<Vec<String>>,
    message: Option<String>,
}

impl ApiError {
    fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
            message: None,
        }
    }

    /// 404 for an id that resolves to no record.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Todo not found")
    }

    /// 422 without field detail.
    pub fn unprocessable(error: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, error)
    }

    /// 422 carrying validation messages.
    pub fn validation(error: impl Into<String>, details: Vec<String>) -> Self {
        let mut err = Self::unprocessable(error);
        err.details = Some(details);
        err
    }

    /// 500 with a short message. Internal detail belongs in the log,
    /// not the response.
    pub fn server_error(message: impl Into<String>) -> Self {
        let mut err = Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        err.message = Some(message.into());
        err
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                error = %self.error,
                message = self.message.as_deref().unwrap_or(""),
                "request failed"
            );
        }

        let body = ErrorBody {
            error: self.error,
            details: self.details,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_body() {
        let err = ApiError::not_found();
        let body = serde_json::to_value(ErrorBody {
            error: err.error,
            details: err.details,
            message: err.message,
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({"error": "Todo not found"}));
    }

    #[test]
    fn test_validation_body_carries_details() {
        let err = ApiError::validation(
            "Failed to create todo",
            vec!["Title can't be blank".to_string()],
        );

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.details.as_deref(), Some(&["Title can't be blank".to_string()][..]));
    }

    #[test]
    fn test_server_error_status() {
        let err = ApiError::server_error("disk full");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error, "Server error");
    }
}
