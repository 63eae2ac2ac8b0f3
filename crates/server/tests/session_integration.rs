//! Session gate behaviour across the API.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestConfig, TestFixture};

#[tokio::test]
async fn test_desk_routes_need_session_flag() {
    let fixture = TestFixture::with_config(TestConfig::with_flag_gate());

    for path in ["/api/v1/tickets", "/api/v1/filters", "/api/v1/summary", "/api/v1/config"] {
        let response = fixture.get(path).await;
        assert_status!(response, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["redirect"], "/login", "path {}", path);
    }
}

#[tokio::test]
async fn test_rejected_create_does_not_touch_desk() {
    let fixture = TestFixture::with_config(TestConfig::with_flag_gate());

    let response = fixture
        .post(
            "/api/v1/tickets",
            json!({ "customer": "a@b.com", "request": "this is long enough" }),
        )
        .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(fixture.state.desk().store().len(), 4);
}

#[tokio::test]
async fn test_session_flag_opens_desk() {
    let fixture = TestFixture::with_config(TestConfig::with_flag_gate()).with_session("true");

    let response = fixture.get("/api/v1/tickets").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["total"], 4);
}

#[tokio::test]
async fn test_health_and_metrics_skip_gate() {
    let fixture = TestFixture::with_config(TestConfig::with_flag_gate());

    let health = fixture.get("/api/v1/health").await;
    assert_status!(health, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");

    let (status, _) = fixture.get_text("/api/v1/metrics").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_config_is_sanitized() {
    let fixture = TestFixture::with_config(TestConfig::with_flag_gate()).with_session("1");

    let response = fixture.get("/api/v1/config").await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["session"]["mode"], "flag");
    assert_eq!(response.body["session"]["login_path"], "/login");
    assert!(response.body["session"].get("header").is_none());
    assert_eq!(response.body["desk"]["seed_fixtures"], true);
}
