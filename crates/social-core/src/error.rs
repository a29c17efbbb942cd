//! Error types for the GameSocial client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the client SDK and its front ends.
///
/// Every failure surfaced to a caller is one of these variants; none of them
/// is retried automatically. `Unauthorized` additionally implies that the
/// persisted session has been cleared by the request layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SocialError {
    /// Login state is missing or invalid (HTTP 401 or business code 401/1001).
    #[error("unauthorized")]
    Unauthorized,

    /// The authenticated identity lacks permission (HTTP or business code 403).
    #[error("forbidden")]
    Forbidden,

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure (DNS, connect, TLS, broken stream).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success business code.
    #[error("business error ({code}): {message}")]
    Business { code: i64, message: String },

    /// HTTP status outside [200, 300) that carries no business envelope.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Local persistence error (session store, config file)
    #[error("storage error: {0}")]
    Storage(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Request rejected locally before submission (presence/type checks only)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SocialError {
    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Business error
    pub fn business(code: i64, message: impl Into<String>) -> Self {
        Self::Business {
            code,
            message: message.into(),
        }
    }

    /// Creates an Http error
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Check if this failure invalidated the session
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a permission failure
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden)
    }

    /// Check if this is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Check if this is a business (envelope-level) failure
    pub fn is_business(&self) -> bool {
        matches!(self, Self::Business { .. })
    }
}

impl From<std::io::Error> for SocialError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SocialError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SocialError>`.
pub type Result<T> = std::result::Result<T, SocialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_display() {
        assert_eq!(SocialError::Unauthorized.to_string(), "unauthorized");
    }

    #[test]
    fn test_business_error_carries_server_message() {
        let err = SocialError::business(201, "库存不足");
        assert!(err.is_business());
        assert_eq!(err.to_string(), "business error (201): 库存不足");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SocialError = io.into();
        assert!(matches!(err, SocialError::Io { .. }));
    }

    #[test]
    fn test_type_checks() {
        assert!(SocialError::Forbidden.is_forbidden());
        assert!(SocialError::Timeout.is_timeout());
        assert!(!SocialError::Forbidden.is_unauthorized());
    }
}
