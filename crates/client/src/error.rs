//! Client error types

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message used when an error response carries nothing readable.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or transport error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The session could not be renewed and has been torn down
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Server returned an error status
    #[error("{message}")]
    ServerError { status: u16, message: String },

    /// Credentials were rejected
    #[error("{0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Bad request
    #[error("{0}")]
    BadRequest(String),

    /// Forbidden
    #[error("{0}")]
    Forbidden(String),

    /// Response body did not match the expected record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Build an error from a non-2xx status and its raw body
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        Self::from_status(status, error_message(body))
    }

    /// HTTP status carried by the error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

/// Extract a readable message from an error body.
///
/// Looks at `detail`, then `message`, then `error`. Anything else, including
/// an empty or non-JSON body, yields [`GENERIC_FAILURE`].
pub fn error_message(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return GENERIC_FAILURE.to_string();
    };

    ["detail", "message", "error"]
        .iter()
        .find_map(|key| match value.get(key) {
            Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        })
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins_over_message() {
        let body = br#"{"detail": "Not found.", "message": "ignored"}"#;
        assert_eq!(error_message(body), "Not found.");
    }

    #[test]
    fn test_message_and_error_fallbacks() {
        assert_eq!(error_message(br#"{"message": "Bad tone"}"#), "Bad tone");
        assert_eq!(
            error_message(br#"{"error": "Admin access required"}"#),
            "Admin access required"
        );
    }

    #[test]
    fn test_generic_failure_for_unreadable_bodies() {
        assert_eq!(error_message(b""), GENERIC_FAILURE);
        assert_eq!(error_message(b"<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(error_message(br#"{"email": ["taken"]}"#), GENERIC_FAILURE);
        assert_eq!(error_message(br#"{"detail": 42}"#), GENERIC_FAILURE);
    }

    #[test]
    fn test_from_status_mapping() {
        let err = ClientError::from_response(StatusCode::FORBIDDEN, br#"{"error": "nope"}"#);
        assert!(matches!(err, ClientError::Forbidden(ref m) if m == "nope"));
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "nope");

        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, b"");
        assert!(matches!(err, ClientError::ServerError { status: 502, .. }));
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn test_session_expired_message() {
        let err = ClientError::SessionExpired;
        assert!(err.is_session_expired());
        assert_eq!(err.to_string(), "Session expired. Please login again.");
        assert_eq!(err.status(), None);
    }
}
