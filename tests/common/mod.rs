//! Common test utilities for integration tests.
//!
//! Provides a mock-server-backed client and envelope builders so individual
//! test files stay focused on request/response assertions.

use serde_json::{Value, json};

use jotform_client::JotformClient;

/// API key used by every mocked test; mocks assert it arrives as a header.
pub const TEST_API_KEY: &str = "test-api-key";

/// Build a client pointed at the given mock server.
pub fn test_client(server: &mockito::Server) -> JotformClient {
    JotformClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(server.url())
        .build()
        .expect("test client should build")
}

/// A success envelope wrapping the given content payload.
#[allow(dead_code)]
pub fn success_body(content: Value) -> String {
    json!({
        "responseCode": 200,
        "message": "success",
        "content": content,
    })
    .to_string()
}

/// An error envelope with the given code and message.
#[allow(dead_code)]
pub fn error_body(code: u16, message: &str) -> String {
    json!({
        "responseCode": code,
        "message": message,
    })
    .to_string()
}
