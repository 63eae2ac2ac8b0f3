//! Status filter handlers for the desk's list view.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use calldesk_core::{Status, StatusFilter};
use serde::Deserialize;
use std::sync::Arc;

use super::tickets::TicketErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetFilterBody {
    pub visible: bool,
}

pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<StatusFilter> {
    Json(*state.desk().filter())
}

/// Show or hide one status
pub async fn set_filter(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
    Json(body): Json<SetFilterBody>,
) -> Result<Json<StatusFilter>, (StatusCode, Json<TicketErrorResponse>)> {
    let status = status.parse::<Status>().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(TicketErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let mut desk = state.desk();
    desk.set_filter(status, body.visible);
    Ok(Json(*desk.filter()))
}

/// Make every status visible again
pub async fn reset_filters(State(state): State<Arc<AppState>>) -> Json<StatusFilter> {
    let mut desk = state.desk();
    desk.reset_filter();
    Json(*desk.filter())
}
