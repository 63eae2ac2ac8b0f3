use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::middleware::{metrics_middleware, session_middleware};
use super::{filters, handlers, tickets};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Routes behind the session gate
    let desk_routes = Router::new()
        .route("/config", get(handlers::get_config))
        .route("/summary", get(handlers::summary))
        // Tickets
        .route(
            "/tickets",
            get(tickets::list_tickets).post(tickets::create_ticket),
        )
        .route(
            "/tickets/{id}",
            get(tickets::get_ticket).delete(tickets::delete_ticket),
        )
        .route("/tickets/{id}/status", put(tickets::update_status))
        // List view filter
        .route(
            "/filters",
            get(filters::get_filters).delete(filters::reset_filters),
        )
        .route("/filters/{status}", put(filters::set_filter))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            session_middleware,
        ));

    // Health and metrics stay reachable without a session
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .merge(desk_routes)
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
