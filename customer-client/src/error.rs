//! Client error types

use http::StatusCode;
use shared::ApiErrorBody;
use thiserror::Error;

/// Text shown when a failure carries no readable backend message
pub const SERVER_ERROR_MESSAGE: &str = "Server error!";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a structured error body
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Backend answered with an error status and no readable error body
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Classify a non-2xx response.
    ///
    /// The body is decoded as [`ApiErrorBody`]; when that fails the raw text
    /// is kept and no message is extracted.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(api_err) => ClientError::Api {
                status: status.as_u16(),
                message: api_err.message,
            },
            Err(_) => ClientError::Status {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// Backend-supplied message, if the error body carried one
    pub fn api_message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the backend message, or the generic fallback
    pub fn display_message(&self) -> &str {
        self.api_message().unwrap_or(SERVER_ERROR_MESSAGE)
    }

    /// HTTP status of the failed response, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } | ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body_yields_message() {
        let err = ClientError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"status":404,"error":"Not Found","message":"Customer with id '7' was not found."}"#
                .to_string(),
        );
        assert!(err.is_not_found());
        assert_eq!(err.display_message(), "Customer with id '7' was not found.");
    }

    #[test]
    fn test_malformed_body_falls_back() {
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "<html>oops</html>".into());
        assert!(matches!(err, ClientError::Status { status: 502, .. }));
        assert_eq!(err.api_message(), None);
        assert_eq!(err.display_message(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_empty_body_falls_back() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, String::new());
        assert!(err.is_not_found());
        assert_eq!(err.display_message(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_body_without_message_falls_back() {
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, r#"{"error":"Bad"}"#.into());
        assert_eq!(err.display_message(), SERVER_ERROR_MESSAGE);
    }
}
