//! Mock API tests for the syncano library.
//!
//! These tests use wiremock to simulate the Syncano API and exercise session
//! establishment without network access or real credentials.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use syncano::{ApiRoot, Credentials, Error, Session, SyncanoConfig};

/// Helper to build a config pointing at a mock server.
fn mock_config(server: &MockServer) -> SyncanoConfig {
    let root = ApiRoot::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    SyncanoConfig::new(root, "127.0.0.1")
}

fn account_body() -> serde_json::Value {
    json!({
        "id": 1,
        "email": "a@b.com",
        "first_name": "A",
        "last_name": "B"
    })
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn connect_with_api_key_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/"))
        .and(query_param("api_key", "validkey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body()))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let credentials = Credentials::new().with_api_key("validkey");
    let session = Session::connect(&config, credentials).await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.api_key(), "validkey");

    // Secrets stay out of Debug output.
    let debug = format!("{:?}", session);
    assert!(!debug.contains("validkey"));
}

#[tokio::test]
async fn connect_with_bad_api_key_is_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid API key."
        })))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let credentials = Credentials::new().with_api_key("badkey");
    let err = Session::connect(&config, credentials).await.unwrap_err();

    assert!(matches!(err, Error::Client { status: 401 }));
}

#[tokio::test]
async fn connect_with_login_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/account/auth/"))
        .and(body_json(json!({
            "email": "x",
            "password": "y"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_key": "newkey"
        })))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let credentials = Credentials::new().with_login("x", "y");
    let session = Session::connect(&config, credentials).await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.api_key(), "newkey");
}

#[tokio::test]
async fn connect_with_rejected_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/account/auth/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid email or password."
        })))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let credentials = Credentials::new().with_login("big.boy@email.com", "password");
    let err = Session::connect(&config, credentials).await.unwrap_err();

    assert!(matches!(err, Error::Client { status: 401 }));
}

#[tokio::test]
async fn api_key_never_falls_back_to_login() {
    let server = MockServer::start().await;

    // The key is rejected, yet the login endpoint must never be consulted.
    Mock::given(method("GET"))
        .and(path("/v1/account/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/account/auth/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_key": "should-not-be-issued"
        })))
        .expect(0)
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let credentials = Credentials::new()
        .with_api_key("badkey")
        .with_login("x", "y");
    let err = Session::connect(&config, credentials).await.unwrap_err();

    assert!(matches!(err, Error::Client { status: 401 }));
}

#[tokio::test]
async fn reauthentication_is_a_noop() {
    let server = MockServer::start().await;

    // Exactly one validation round-trip for connect; re-authentication must
    // not issue another.
    Mock::given(method("GET"))
        .and(path("/v1/account/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let credentials = Credentials::new().with_api_key("validkey");
    let mut session = Session::connect(&config, credentials).await.unwrap();

    session.authenticate().await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(session.api_key(), "validkey");
}

#[tokio::test]
async fn missing_credentials_fail_without_network() {
    let config = SyncanoConfig::default();
    let err = Session::connect(&config, Credentials::new()).await.unwrap_err();

    match err {
        Error::Infrastructure { message } => {
            assert!(message.contains("missing credentials"));
        }
        other => panic!("expected infrastructure error, got {other:?}"),
    }
}

// ============================================================================
// Account Details Tests
// ============================================================================

#[tokio::test]
async fn account_details_decodes_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/"))
        .and(query_param("api_key", "validkey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body()))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = Session::connect(&config, Credentials::new().with_api_key("validkey"))
        .await
        .unwrap();

    let account = session.account_details().await.unwrap();
    assert_eq!(account.id, 1);
    assert_eq!(account.email, "a@b.com");
    assert_eq!(account.first_name, "A");
    assert_eq!(account.last_name, "B");
}

#[tokio::test]
async fn account_details_is_never_cached() {
    let server = MockServer::start().await;

    // Login exchange keeps the account endpoint untouched during connect,
    // so the two explicit fetches below account for both expected hits.
    Mock::given(method("POST"))
        .and(path("/v1/account/auth/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account_key": "issued"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/account/"))
        .and(query_param("api_key", "issued"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body()))
        .expect(2)
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let session = Session::connect(&config, Credentials::new().with_login("x", "y"))
        .await
        .unwrap();

    session.account_details().await.unwrap();
    session.account_details().await.unwrap();
}

// ============================================================================
// Response Classification Tests
// ============================================================================

#[tokio::test]
async fn server_errors_are_classified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/account/auth/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let err = Session::connect(&config, Credentials::new().with_login("x", "y"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Server { status: 503 }));
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn redirections_are_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/elsewhere"))
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let err = Session::connect(&config, Credentials::new().with_api_key("k"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Redirection { status: 302 }));
}

#[tokio::test]
async fn undecodable_success_body_is_infrastructure_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/account/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("not json")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let config = mock_config(&server);
    let err = Session::connect(&config, Credentials::new().with_api_key("k"))
        .await
        .unwrap_err();

    match err {
        Error::Infrastructure { message } => {
            // Diagnostics carry the raw body and the target type.
            assert!(message.contains("not json"));
            assert!(message.contains("AccountDetails"));
        }
        other => panic!("expected infrastructure error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_infrastructure_error() {
    // Nothing is listening on this port.
    let root = ApiRoot::new("http://127.0.0.1:1").unwrap();
    let config = SyncanoConfig::new(root, "127.0.0.1");

    let err = Session::connect(&config, Credentials::new().with_api_key("k"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Infrastructure { .. }));
    assert_eq!(err.status(), None);
}
