//! Error types for the JotForm client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during JotForm client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The API key was rejected (response code 401).
    #[error("unauthorized API call")]
    Unauthorized,

    /// The requested resource does not exist (response code 404).
    /// Carries the `message` field of the response body.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limits exceeded or service down (response code 503).
    #[error("service unavailable: rate limit exceeded or service outage")]
    ServiceUnavailable,

    /// Any other non-200 response code in the envelope.
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not a valid JotForm envelope.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// Client was misconfigured at build time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Check if this error came from the API envelope rather than transport.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::NotFound(_) | Self::ServiceUnavailable | Self::Api { .. }
        )
    }
}
