//! Ticket API handlers.
//!
//! Each handler maps one user gesture onto one desk call.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calldesk_core::{FieldError, Status, StatusFilter, Ticket, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::metrics::{
    INTAKE_REJECTIONS_TOTAL, TICKETS_CREATED_TOTAL, TICKETS_DELETED_TOTAL,
    TICKET_STATUS_TRANSITIONS,
};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a ticket.
///
/// Missing fields are treated as empty so they surface as field errors.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTicketBody {
    /// Customer email address
    pub customer: String,
    /// Free-text request description
    pub request: String,
}

/// Query parameters for listing tickets
#[derive(Debug, Deserialize)]
pub struct ListTicketsParams {
    /// Comma-separated statuses; overrides the desk's filter for this request
    pub status: Option<String>,
}

/// Request body for a status change
#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

/// Response for ticket operations
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: String,
    pub customer: String,
    pub request: String,
    pub status: Status,
    pub status_label: &'static str,
    pub created_at: String,
}

impl From<&Ticket> for TicketResponse {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id().to_string(),
            customer: ticket.customer().to_string(),
            request: ticket.request().to_string(),
            status: ticket.status(),
            status_label: ticket.status().label(),
            created_at: ticket.created_at().to_rfc3339(),
        }
    }
}

/// Response for listing tickets
#[derive(Debug, Serialize)]
pub struct ListTicketsResponse {
    pub tickets: Vec<TicketResponse>,
    /// Tickets shown under the applied filter
    pub visible: usize,
    /// Tickets in the desk
    pub total: usize,
    pub filter: StatusFilter,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct TicketErrorResponse {
    pub error: String,
}

/// Intake rejection with one entry per broken rule
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub errors: Vec<FieldError>,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(TicketErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

fn validation_response(errors: ValidationErrors) -> Response {
    for field_error in errors.iter() {
        INTAKE_REJECTIONS_TOTAL
            .with_label_values(&[field_error.field.as_str()])
            .inc();
    }

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorResponse {
            error: errors.to_string(),
            errors: errors.into_errors(),
        }),
    )
        .into_response()
}

/// Parse `open,in_progress` into a filter showing just those statuses.
fn parse_status_list(raw: &str) -> Result<StatusFilter, String> {
    let statuses = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Status>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StatusFilter::only(&statuses))
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a new ticket
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTicketBody>,
) -> Response {
    let result = state.desk().submit(&body.customer, &body.request);

    match result {
        Ok(ticket) => {
            TICKETS_CREATED_TOTAL.inc();
            (StatusCode::CREATED, Json(TicketResponse::from(&ticket))).into_response()
        }
        Err(errors) => validation_response(errors),
    }
}

/// Get a ticket by ID
pub async fn get_ticket(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    let desk = state.desk();
    match desk.store().get(&id) {
        Some(ticket) => Json(TicketResponse::from(ticket)).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("Ticket not found: {}", id)),
    }
}

/// List tickets under the desk's filter, or the `status` query override
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTicketsParams>,
) -> Response {
    let override_filter = match params.status.as_deref().map(parse_status_list) {
        Some(Ok(filter)) => Some(filter),
        Some(Err(e)) => return error_response(StatusCode::BAD_REQUEST, e),
        None => None,
    };

    let desk = state.desk();
    let filter = override_filter.unwrap_or(*desk.filter());
    let tickets: Vec<TicketResponse> = desk
        .store()
        .list_filtered(&filter)
        .into_iter()
        .map(TicketResponse::from)
        .collect();

    Json(ListTicketsResponse {
        visible: tickets.len(),
        total: desk.store().len(),
        tickets,
        filter,
    })
    .into_response()
}

/// Move a ticket to a new status
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusBody>,
) -> Response {
    let status = match body.status.parse::<Status>() {
        Ok(status) => status,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let mut desk = state.desk();
    match desk.set_status(&id, status) {
        Some((previous, ticket)) => {
            TICKET_STATUS_TRANSITIONS
                .with_label_values(&[previous.as_str(), status.as_str()])
                .inc();
            Json(TicketResponse::from(ticket)).into_response()
        }
        None => {
            warn!(ticket_id = %id, "Status change for unknown ticket");
            error_response(StatusCode::NOT_FOUND, format!("Ticket not found: {}", id))
        }
    }
}

/// Delete a ticket. Deleting an unknown id succeeds without effect.
pub async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    if state.desk().delete(&id).is_some() {
        TICKETS_DELETED_TOTAL.inc();
    }
    StatusCode::NO_CONTENT
}
