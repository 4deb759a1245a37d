//! Response-code dispatch and envelope parsing tests.
//!
//! The envelope's embedded `responseCode` governs success or failure:
//! 200 returns `content`, 401/404/503 map to their dedicated error variants,
//! and every other code maps to `ClientError::Api`.

mod common;

use common::*;
use serde_json::json;

use jotform_client::ClientError;

#[test]
fn test_success_returns_content_unchanged() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/form/5")
        .with_body(r#"{"responseCode":"200","content":{"id":"5"}}"#)
        .create();

    let client = test_client(&server);
    let content = client.get_form(5).unwrap();

    mock.assert();
    assert_eq!(content, json!({"id": "5"}));
}

#[test]
fn test_success_without_content_returns_null() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/user")
        .with_body(r#"{"responseCode":200}"#)
        .create();

    let client = test_client(&server);
    let content = client.get_user().unwrap();

    mock.assert();
    assert!(content.is_null());
}

#[test]
fn test_401_maps_to_unauthorized() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/user")
        .with_body(r#"{"responseCode":"401"}"#)
        .create();

    let client = test_client(&server);
    let err = client.get_user().unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[test]
fn test_404_carries_body_message() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/form/99999")
        .with_body(r#"{"responseCode":"404","message":"Form not found"}"#)
        .create();

    let client = test_client(&server);
    let err = client.get_form(99999).unwrap_err();

    mock.assert();
    match err {
        ClientError::NotFound(message) => assert_eq!(message, "Form not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_404_without_message_gets_fallback() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/form/99999")
        .with_body(r#"{"responseCode":404}"#)
        .create();

    let client = test_client(&server);
    let err = client.get_form(99999).unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::NotFound(m) if m == "resource not found"));
}

#[test]
fn test_503_maps_to_service_unavailable() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/user")
        .with_body(error_body(503, "rate limit exceeded"))
        .create();

    let client = test_client(&server);
    let err = client.get_user().unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::ServiceUnavailable));
}

#[test]
fn test_other_codes_map_to_api_error() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/user")
        .with_body(error_body(400, "Invalid request"))
        .create();

    let client = test_client(&server);
    let err = client.get_user().unwrap_err();

    mock.assert();
    match err {
        ClientError::Api { code, message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "Invalid request");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[test]
fn test_envelope_code_governs_over_http_status() {
    let mut server = mockito::Server::new();

    // Transport says 200, envelope says 401; the envelope wins.
    let mock = server
        .mock("GET", "/v1/user")
        .with_status(200)
        .with_body(r#"{"responseCode":401}"#)
        .create();

    let client = test_client(&server);
    let err = client.get_user().unwrap_err();

    mock.assert();
    assert!(err.is_api_error());
}

#[test]
fn test_non_json_body_is_invalid_response() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/user")
        .with_body("<html>gateway error</html>")
        .create();

    let client = test_client(&server);
    let err = client.get_user().unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[test]
fn test_missing_response_code_is_invalid_response() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/v1/user")
        .with_body(r#"{"content":{"id":"5"}}"#)
        .create();

    let client = test_client(&server);
    let err = client.get_user().unwrap_err();

    mock.assert();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[test]
fn test_connection_refused_surfaces_as_http_error() {
    // Nothing listens on this port.
    let client = jotform_client::JotformClient::builder()
        .api_key(TEST_API_KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.get_user().unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(!err.is_api_error());
}
