//! End-to-end tests for `LicensedClient` over the reqwest transport.
//!
//! The client always targets the fixed production endpoint, so requests are
//! redirected to a wiremock server by a thin `Transport` wrapper around
//! `HttpTransport`.

use licensed_client::{
    API_ENDPOINT, HttpTransport, LicenseError, LicensedClient, NetworkError, Tier, Transport,
    TransportResponse,
};
use serde_json::{Map, Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Rewrites the production endpoint onto a local mock server.
struct Redirect {
    inner: HttpTransport,
    base: String,
}

impl Transport for Redirect {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, NetworkError> {
        let local = url.replacen(API_ENDPOINT, &self.base, 1);
        self.inner.post_json(&local, body).await
    }
}

fn redirected_client(server_uri: &str, key: Option<&str>, tier: Tier) -> LicensedClient<Redirect> {
    let transport = Redirect {
        inner: HttpTransport::new().unwrap(),
        base: server_uri.to_string(),
    };
    LicensedClient::with_transport(key.map(str::to_string), tier, transport).unwrap()
}

fn payload() -> Map<String, Value> {
    match json!({"document": "invoice-42", "pages": [1, 2]}) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn posts_wire_body_and_returns_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "data": {"document": "invoice-42", "pages": [1, 2]},
            "license": "bsc_00ff00ff00ff00ff",
            "tier": "basic",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = redirected_client(&server.uri(), Some("bsc_00ff00ff00ff00ff"), Tier::Basic);
    let response = client.api_call(&payload()).await.unwrap();

    assert_eq!(Value::Object(response), json!({"ok": true}));
}

#[tokio::test]
async fn server_error_status_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = redirected_client(&server.uri(), None, Tier::Free);
    let err = client.api_call(&payload()).await.unwrap_err();

    match err {
        LicenseError::Network(NetworkError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_license_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = redirected_client(&server.uri(), Some("ent_SHOUTING12345678"), Tier::Enterprise);
    let err = client.api_call(&payload()).await.unwrap_err();

    assert!(err.is_authorization());
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // Closed port
    let client = redirected_client("http://127.0.0.1:1", None, Tier::Free);
    let err = client.api_call(&payload()).await.unwrap_err();

    assert!(matches!(err, LicenseError::Network(NetworkError::Request(_))));
}

#[tokio::test]
async fn malformed_success_body_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = redirected_client(&server.uri(), Some("pro_0123456789abcdef"), Tier::Pro);
    let err = client.api_call(&payload()).await.unwrap_err();

    assert!(err.is_network());
}
