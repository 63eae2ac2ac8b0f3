//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that builds the full router around a
//! fresh call desk, so every test starts from a known set of tickets without
//! binding a port.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use calldesk_core::{
    CallDesk, Config, DeskConfig, FlagGate, OpenGate, ServerConfig, SessionConfig, SessionGate,
    SessionMode, TicketStore,
};
use calldesk_server::state::AppState;

/// Header the flag gate looks for in tests.
pub const SESSION_HEADER: &str = "x-calldesk-session";

/// Test fixture wrapping an in-process router.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_ticket_creation() {
///     let fixture = TestFixture::new();
///
///     let response = fixture.post("/api/v1/tickets", json!({
///         "customer": "a@b.com",
///         "request": "this is long enough"
///     })).await;
///
///     assert_eq!(response.status, 201);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Shared state, for inspecting the desk directly
    pub state: Arc<AppState>,
    /// Header sent with every request, if any
    session: Option<(String, String)>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Seeded desk, open session gate.
    pub fn new() -> Self {
        Self::with_config(TestConfig::default())
    }

    /// Create a test fixture with custom configuration.
    pub fn with_config(test_config: TestConfig) -> Self {
        let session = SessionConfig {
            mode: test_config.session_mode,
            header: SESSION_HEADER.to_string(),
            ..SessionConfig::default()
        };

        let gate: Arc<dyn SessionGate> = match test_config.session_mode {
            SessionMode::None => Arc::new(OpenGate::new()),
            SessionMode::Flag => Arc::new(FlagGate::new(SESSION_HEADER)),
        };

        let config = Config {
            session,
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            desk: DeskConfig {
                seed_fixtures: test_config.seed_fixtures,
            },
        };

        let desk = if test_config.seed_fixtures {
            CallDesk::seeded()
        } else {
            CallDesk::new(TicketStore::new())
        };

        let state = Arc::new(AppState::new(config, gate, desk));
        let router = calldesk_server::api::create_router(Arc::clone(&state));

        Self {
            router,
            state,
            session: None,
        }
    }

    /// Send the session flag with every following request.
    pub fn with_session(mut self, value: &str) -> Self {
        self.session = Some((SESSION_HEADER.to_string(), value.to_string()));
        self
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> TestResponse {
        self.request("PUT", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = self
            .builder("POST", path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Fetch a plain-text endpoint (metrics).
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = self.builder("GET", path).body(Body::empty()).unwrap();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    fn builder(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some((name, value)) = &self.session {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = self.builder(method, path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub session_mode: SessionMode,
    pub seed_fixtures: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            session_mode: SessionMode::None,
            seed_fixtures: true,
        }
    }
}

impl TestConfig {
    /// Require the session flag.
    pub fn with_flag_gate() -> Self {
        Self {
            session_mode: SessionMode::Flag,
            ..Self::default()
        }
    }

    /// Start from an empty desk.
    pub fn empty_desk() -> Self {
        Self {
            seed_fixtures: false,
            ..Self::default()
        }
    }
}

/// Ids of the tickets in a list response, in order.
pub fn ticket_ids(body: &Value) -> Vec<String> {
    body["tickets"]
        .as_array()
        .map(|tickets| {
            tickets
                .iter()
                .filter_map(|t| t["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
