//! Client builder for constructing [`JotformClient`] instances.
//!
//! Responsible for:
//! - A fluent API over the construction options (API key, base URL, timeout,
//!   debug flag)
//! - Validating that an API key was provided
//! - Normalizing the base URL (trailing slashes removed)
//! - Configuring the underlying blocking HTTP client

use std::time::Duration;

use secrecy::SecretString;

use crate::client::JotformClient;
use crate::error::{ClientError, Result};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.jotform.com";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for creating a new [`JotformClient`].
///
/// Only the API key is required; everything else has a sensible default.
///
/// ```rust,no_run
/// use std::time::Duration;
/// use jotform_client::JotformClient;
///
/// # fn main() -> jotform_client::Result<()> {
/// let client = JotformClient::builder()
///     .api_key("my-api-key")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct JotformClientBuilder {
    api_key: Option<SecretString>,
    base_url: String,
    timeout: Duration,
    debug_mode: bool,
}

impl Default for JotformClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug_mode: false,
        }
    }
}

impl JotformClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key. Required.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(key.into().into()));
        self
    }

    /// Override the base URL.
    ///
    /// Defaults to the production host; trailing slashes are removed. Mainly
    /// useful for pointing the client at a mock server in tests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the debug flag.
    ///
    /// Accepted for parity with the service's other client libraries; request
    /// logging goes through `tracing` regardless of this flag.
    pub fn debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] when no API key was provided,
    /// and propagates HTTP client construction failures.
    pub fn build(self) -> Result<JotformClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| ClientError::InvalidConfig("API key is required".to_string()))?;

        let base_url = self.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base URL must not be empty".to_string(),
            ));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        Ok(JotformClient {
            http,
            base_url,
            api_key,
            debug_mode: self.debug_mode,
        })
    }
}
