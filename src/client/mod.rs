//! Main JotForm API client and API methods.
//!
//! This module provides the primary [`JotformClient`]. API methods live in
//! per-resource submodules:
//! - [`builder`]: client construction and configuration
//! - `user`: account details, usage, settings, history, register/login
//! - `forms`: form CRUD, webhooks, files, properties
//! - `questions`: form question CRUD
//! - `submissions`: submission listing, creation, editing, deletion
//! - `folders`: folder listing and details
//! - `reports`: report listing and details
//!
//! # What this module does NOT handle:
//! - HTTP request execution (delegated to [`crate::endpoints`])
//! - Form parameter encoding (delegated to [`crate::endpoints::form_params`])
//!
//! # Invariants
//! - The client is immutable after construction; every method performs one
//!   blocking round trip and returns the envelope's `content` payload.

pub mod builder;

// API method submodules
mod folders;
mod forms;
mod questions;
mod reports;
mod submissions;
mod user;

use secrecy::SecretString;

use crate::error::Result;

/// JotForm REST API client.
///
/// Construct one with [`JotformClient::new`] or, for non-default
/// configuration, with [`JotformClient::builder`]:
///
/// ```rust,no_run
/// use jotform_client::JotformClient;
///
/// # fn main() -> jotform_client::Result<()> {
/// let client = JotformClient::new("my-api-key")?;
/// let user = client.get_user()?;
/// println!("{user}");
/// # Ok(())
/// # }
/// ```
///
/// Every method returns the raw `content` payload of the response envelope
/// as [`serde_json::Value`]; the client does not model resource shapes.
#[derive(Debug)]
pub struct JotformClient {
    pub(crate) http: reqwest::blocking::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) debug_mode: bool,
}

impl JotformClient {
    /// Create a new client builder.
    pub fn builder() -> builder::JotformClientBuilder {
        builder::JotformClientBuilder::new()
    }

    /// Create a client with default configuration for the given API key.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether the client was built with the debug flag.
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }
}
