//! Error types and the error response body

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error kinds reported by the customer backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Posted data was missing fields or malformed (400)
    BadRequest,
    /// Resource not found (404)
    NotFound,
    /// Request body is not JSON (415)
    UnsupportedMediaType,
    /// Unexpected failure (500)
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short reason phrase carried in the `error` field
    pub fn reason(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::UnsupportedMediaType => "Unsupported media type",
            Self::InternalError => "Internal Server Error",
        }
    }
}

/// Application error with code and message
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

impl AppError {
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::BadRequest, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, msg)
    }

    pub fn unsupported_media_type(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::UnsupportedMediaType, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Body of every error response
///
/// ```json
/// { "status": 404, "error": "Not Found", "message": "Customer with id '7' was not found." }
/// ```
///
/// Only `message` is required when decoding; backends that send just
/// `{ "message": ... }` decode too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub error: String,
    pub message: String,
}

impl From<&AppError> for ApiErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            status: err.http_status().as_u16(),
            error: err.code.reason().to_string(),
            message: err.message.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiErrorBody::from(&self);

        if status.is_server_error() {
            tracing::error!(status = %status, message = %self.message, "Server error occurred");
        } else {
            tracing::warn!(status = %status, message = %self.message, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let err = AppError::unsupported_media_type("Content-Type must be application/json");
        let value = serde_json::to_value(ApiErrorBody::from(&err)).unwrap();
        assert_eq!(value["status"], 415);
        assert_eq!(value["error"], "Unsupported media type");
        assert_eq!(value["message"], "Content-Type must be application/json");
    }

    #[test]
    fn test_error_body_decodes_message_only() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(body.message, "boom");
        assert_eq!(body.status, 0);
    }

    #[test]
    fn test_error_body_requires_message() {
        assert!(serde_json::from_str::<ApiErrorBody>(r#"{"error":"Not Found"}"#).is_err());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::not_found("x").http_status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::bad_request("x").http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
