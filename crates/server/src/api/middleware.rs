//! Session gate and metrics middleware for API routes.

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use calldesk_core::{SessionError, SessionRequest};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::{
    HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION, SESSION_REJECTIONS_TOTAL,
};
use crate::state::AppState;

/// Path label for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Metrics middleware that tracks HTTP request duration and counts.
///
/// Requests are labelled with the route template (`/api/v1/tickets/{id}`),
/// never the raw URI, so clients cannot grow the label set.
///
/// This middleware records:
/// - Request duration (histogram)
/// - Request count (counter)
/// - Requests in flight (gauge)
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(UNMATCHED_PATH, MatchedPath::as_str)
        .to_string();

    HTTP_REQUESTS_IN_FLIGHT.inc();

    let response = next.run(request).await;

    HTTP_REQUESTS_IN_FLIGHT.dec();

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    HTTP_REQUEST_DURATION
        .with_label_values(&[&method, &path, &status])
        .observe(duration);
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, &status])
        .inc();

    response
}

/// Body returned when a request has no session.
#[derive(Debug, Serialize)]
pub struct SessionRequiredResponse {
    pub error: String,
    /// Where the client should go to establish a session
    pub redirect: String,
}

/// Session middleware that runs the configured gate before any desk route.
///
/// Requests without a session get 401 and the login path to redirect to.
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let session_request = SessionRequest::from_headers(
        request
            .headers()
            .iter()
            .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v))),
    );

    match state.session_gate().check(&session_request).await {
        Ok(()) => next.run(request).await,
        Err(SessionError::Missing) => {
            SESSION_REJECTIONS_TOTAL
                .with_label_values(&["missing"])
                .inc();
            (
                StatusCode::UNAUTHORIZED,
                Json(SessionRequiredResponse {
                    error: SessionError::Missing.to_string(),
                    redirect: state.login_path().to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Session gate failed: {}", e);
            SESSION_REJECTIONS_TOTAL
                .with_label_values(&["internal_error"])
                .inc();
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
