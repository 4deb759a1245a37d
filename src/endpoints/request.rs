//! Request executors, one per HTTP verb.
//!
//! Every API operation funnels through here: build the versioned URL, attach
//! the `apiKey` header, perform one blocking round trip, parse the response
//! envelope and dispatch on its `responseCode`.
//!
//! # Invariants
//! - Exactly one network round trip per call; no retry, no caching.
//! - GET/DELETE carry parameters in the query string, POST carries them as a
//!   URL-encoded body, PUT sends a caller-supplied raw body.
//! - Every non-200 `responseCode` maps to an error; transport faults
//!   propagate as [`ClientError::Http`].

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiResponse;

/// Versioned path prefix for all JotForm endpoints.
const API_VERSION: &str = "v1";

fn api_url(base_url: &str, path: &str) -> String {
    format!("{base_url}/{API_VERSION}{path}")
}

/// Execute a GET request with optional query parameters.
pub fn get(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    path: &str,
    query: &[(String, String)],
) -> Result<Value> {
    let url = api_url(base_url, path);
    debug!(method = "GET", %url, "executing request");

    let mut builder = http.get(&url).header("apiKey", api_key.expose_secret());
    if !query.is_empty() {
        builder = builder.query(query);
    }

    send(builder)
}

/// Execute a DELETE request with optional query parameters.
pub fn delete(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    path: &str,
    query: &[(String, String)],
) -> Result<Value> {
    let url = api_url(base_url, path);
    debug!(method = "DELETE", %url, "executing request");

    let mut builder = http.delete(&url).header("apiKey", api_key.expose_secret());
    if !query.is_empty() {
        builder = builder.query(query);
    }

    send(builder)
}

/// Execute a POST request with a URL-encoded form body.
pub fn post(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    path: &str,
    form: &[(String, String)],
) -> Result<Value> {
    let url = api_url(base_url, path);
    debug!(method = "POST", %url, params = form.len(), "executing request");

    let builder = http
        .post(&url)
        .header("apiKey", api_key.expose_secret())
        .form(form);

    send(builder)
}

/// Execute a PUT request with a caller-supplied raw body.
///
/// The bulk "create many" operations take pre-formatted data from the
/// caller and transmit it unmodified.
pub fn put_raw(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    path: &str,
    body: &str,
) -> Result<Value> {
    let url = api_url(base_url, path);
    debug!(method = "PUT", %url, "executing request");

    let builder = http
        .put(&url)
        .header("apiKey", api_key.expose_secret())
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string());

    send(builder)
}

/// Perform the round trip and dispatch on the envelope's `responseCode`.
fn send(builder: RequestBuilder) -> Result<Value> {
    let response = builder.send()?;
    let body = response.text()?;

    let envelope: ApiResponse = serde_json::from_str(&body).map_err(|e| {
        ClientError::InvalidResponse(format!("failed to parse response envelope: {e}"))
    })?;

    match envelope.response_code {
        200 => Ok(envelope.content.unwrap_or(Value::Null)),
        401 => Err(ClientError::Unauthorized),
        404 => Err(ClientError::NotFound(
            envelope
                .message
                .unwrap_or_else(|| "resource not found".to_string()),
        )),
        503 => Err(ClientError::ServiceUnavailable),
        code => Err(ClientError::Api {
            code,
            message: envelope.message.unwrap_or_default(),
        }),
    }
}
