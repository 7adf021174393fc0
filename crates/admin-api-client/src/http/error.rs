/*
[INPUT]:  Error sources (HTTP, status codes, backend envelope, serialization, input checks)
[OUTPUT]: Structured error type shared by the transport and the endpoint catalog
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the admin API client
#[derive(Error, Debug)]
pub enum AdminApiError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Backend envelope carried a failure code
    #[error("backend error (code {code}): {message}")]
    Backend { code: String, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Caller supplied an argument the endpoint cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by a custom transport, displayed verbatim
    #[error("{0}")]
    Transport(String),
}

impl AdminApiError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminApiError::Api { status, .. } => Some(*status),
            AdminApiError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// True for 4xx responses and rejected input
    pub fn is_client_error(&self) -> bool {
        match self {
            AdminApiError::InvalidArgument(_) => true,
            _ => self
                .status()
                .is_some_and(|status| (400..500).contains(&status)),
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        AdminApiError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for admin API operations
pub type Result<T> = std::result::Result<T, AdminApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = AdminApiError::api_error(StatusCode::NOT_FOUND, "no such role");
        match &err {
            AdminApiError::Api { status, message } => {
                assert_eq!(*status, 404);
                assert_eq!(message, "no such role");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert_eq!(err.status(), Some(404));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_error_is_client_error() {
        assert!(AdminApiError::InvalidArgument("roleId".into()).is_client_error());
        assert!(!AdminApiError::api_error(StatusCode::BAD_GATEWAY, "down").is_client_error());
        assert!(
            !AdminApiError::Backend {
                code: "500".into(),
                message: "boom".into()
            }
            .is_client_error()
        );
    }

    #[test]
    fn test_error_message_is_plain_text() {
        let err = AdminApiError::InvalidResponse("boom".into());
        assert_eq!(err.to_string(), "Invalid response: boom");
        assert_eq!(AdminApiError::Transport("boom".into()).to_string(), "boom");
    }
}
