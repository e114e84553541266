//! Common test utilities for e2e tests
//!
//! Builds the API router over a fresh in-memory registry and mints JWTs.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tower::util::ServiceExt;

use chain_network_registry::domain::registry::BuiltinNetworks;
use chain_network_registry::infrastructure::driven_adapters::config::AppConfig;
use chain_network_registry::infrastructure::driven_adapters::network_repository::InMemoryNetworkRepository;
use chain_network_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test JWT secret (minimum 32 characters)
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-e2e-testing-only-min-32-chars";

/// JWT claims for test tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct TestClaims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub builtin: BuiltinNetworks,
    pub jwt_token: String,
}

impl TestApp {
    /// Create a new test application with its own registry
    pub fn new() -> Self {
        let (repository, builtin) = InMemoryNetworkRepository::bootstrap();
        let config = Arc::new(create_test_config());
        let router = api_rest::router(AppState::new(config, Arc::new(repository)));

        Self {
            router,
            builtin,
            jwt_token: generate_test_token(),
        }
    }

    /// Get the authorization header value for requests
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }

    /// Send a request, optionally authenticated and with a JSON body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
        authenticated: bool,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if authenticated {
            builder = builder.header(header::AUTHORIZATION, self.auth_header());
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Read a response body as JSON
pub async fn json_body<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Create a test configuration
fn create_test_config() -> AppConfig {
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[jwt]
secret = "{TEST_JWT_SECRET}"

[rate_limit]
requests_per_second = 1000
burst_size = 1000
"#
    );

    AppConfig::from_toml_str(&config_str).expect("Failed to build test config")
}

fn token_with_expiry(iat: i64, exp: i64) -> String {
    let claims = TestClaims {
        sub: "test-operator".to_string(),
        role: "admin".to_string(),
        iat,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to generate test JWT token")
}

/// Generate a valid JWT token for testing
pub fn generate_test_token() -> String {
    let now = Utc::now().timestamp();
    token_with_expiry(now, now + 3600)
}

/// Generate an expired JWT token for testing unauthorized scenarios
pub fn generate_expired_token() -> String {
    let now = Utc::now().timestamp();
    token_with_expiry(now - 7200, now - 3600)
}

/// Request body for a custom network
pub fn custom_network_body() -> serde_json::Value {
    serde_json::json!({
        "name": "customnet",
        "alias": ["custom", "cnet"],
        "pubkeyhash": 0x1e,
        "privatekey": 0x9e,
        "scripthash": 0x16,
        "xpubkey": 0x02fe_52cc_u32,
        "xprivkey": 0x02fe_52f8_u32,
        "xpubkey256bit": 0x0eec_1111_u32,
        "xprivkey256bit": 0x0eec_2222_u32,
        "networkMagic": 0xc0c0_c0c0_u32,
        "port": 22556,
        "dnsSeeds": ["seed.customnet.io"]
    })
}

/// Network response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct NetworkResponse {
    pub name: String,
    pub alias: Vec<String>,
    pub pubkeyhash: u8,
    pub privatekey: u8,
    pub scripthash: u8,
    pub xpubkey: u32,
    pub xprivkey: u32,
    pub xpubkey256bit: u32,
    pub xprivkey256bit: u32,
    pub network_magic: Option<String>,
    pub port: Option<u16>,
    pub dns_seeds: Option<Vec<String>>,
    pub regtest_enabled: Option<bool>,
}

/// Regtest status structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct RegtestStatus {
    pub network: String,
    pub enabled: bool,
    pub port: Option<u16>,
    pub network_magic: Option<String>,
    pub dns_seeds: Vec<String>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
