//! Error types for the Pinterest client.
//!
//! Three failure families: configuration errors raised before any network
//! I/O, remote API errors carrying the server's code/message payload, and
//! wrapped transport faults. No error is ever retried by this crate.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type for Pinterest operations
pub type PinterestResult<T> = Result<T, PinterestError>;

/// Root error type for the Pinterest integration
#[derive(Error, Debug)]
pub enum PinterestError {
    /// Configuration error, raised synchronously before any network call
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Remote API error from a non-2xx response
    #[error("API error: {0}")]
    Api(ApiError),

    /// Transport-level fault (connection, DNS, TLS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response body that could not be decoded
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),
}

impl PinterestError {
    /// Get the server error code if this is a remote API error
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api(err) => Some(err.code),
            _ => None,
        }
    }

    /// Check whether this error was raised before any network I/O
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Access token required for an authenticated call but not set
    #[error("Access token is required for authenticated requests")]
    MissingAccessToken,

    /// OAuth flow attempted without registered app credentials
    #[error("App id and app secret are required for OAuth flows")]
    MissingAppCredentials,

    /// Update operation called with zero fields set
    #[error("Update requires at least one field: {message}")]
    EmptyUpdate {
        /// Which fields would have been accepted
        message: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),
}

/// Error payload returned by the Pinterest API on a non-2xx response.
///
/// Carries the server's numeric `code` and `message`; any additional
/// implementation-defined fields pass through in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Server-provided error code
    #[serde(default)]
    pub code: i64,
    /// Server-provided error message
    #[serde(default)]
    pub message: String,
    /// Additional fields from the failure payload, passed through verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiError {
    /// Create an API error from a code and message
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            extra: serde_json::Map::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for PinterestError {
    fn from(err: ApiError) -> Self {
        PinterestError::Api(err)
    }
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Other HTTP-level fault
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// Non-2xx response whose body is not a decodable error payload
    #[error("Unexpected response (status {status}): {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}
