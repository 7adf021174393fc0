/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for admin-api-client tests

use admin_api_client::{ClientConfig, HttpTransport, SystemManageApi};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Catalog talking to `server` with raw (unwrapped) bodies
pub fn api_for(server: &MockServer) -> SystemManageApi<HttpTransport> {
    api_with_config(server, None)
}

pub fn api_with_config(
    server: &MockServer,
    success_code: Option<&str>,
) -> SystemManageApi<HttpTransport> {
    SystemManageApi::with_config(ClientConfig {
        base_url: server.uri(),
        success_code: success_code.map(str::to_string),
        ..ClientConfig::default()
    })
    .expect("client init")
}

/// Mock token for testing
pub fn mock_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

/// A backend role record
#[allow(dead_code)]
pub fn role_json(id: u32, code: &str) -> Value {
    json!({
        "id": id,
        "name": code.to_lowercase(),
        "code": code,
        "remark": "",
        "order": id,
        "status": "ENABLED",
        "createBy": "root",
        "createTime": "2024-05-01 10:00:00",
        "updateBy": "root",
        "updateTime": "2024-05-02 10:00:00"
    })
}
