#![allow(dead_code)]

//! Fixtures shared by the integration tests.

use boxc_rs::{ApiClient, ClientConfig};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-access-token";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub async fn setup_mock_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// Client pointed at the mock server, without a token.
pub fn anonymous_client(server: &MockServer) -> ApiClient {
    ApiClient::with_config(ClientConfig::with_base_url(server.uri()), None).expect("client init")
}

/// Client pointed at the mock server, holding [`TEST_TOKEN`].
pub fn authed_client(server: &MockServer) -> ApiClient {
    ApiClient::with_config(
        ClientConfig::with_base_url(server.uri()),
        Some(TEST_TOKEN.to_string()),
    )
    .expect("client init")
}

pub fn bearer() -> String {
    format!("Bearer {}", TEST_TOKEN)
}
