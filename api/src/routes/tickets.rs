//! Ticket closing endpoints

use axum::{Router, Json, extract::{State, rejection::JsonRejection}};
use axum::routing::post;
use std::sync::Arc;
use crate::{ApiState, error::ApiError, models::*};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/close_ticket", post(close_ticket))
        .route("/simulate_closure", post(simulate_closure))
}

/// Close a ticket and award points to the closing engineer
#[utoipa::path(
    post,
    path = "/api/close_ticket",
    request_body = CloseTicketRequest,
    responses(
        (status = 200, description = "Ticket archived", body = CloseTicketResponse),
        (status = 400, description = "Missing ticketID or resourceID", body = ErrorResponse),
        (status = 404, description = "Unknown ticket or resource", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn close_ticket(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CloseTicketRequest>, JsonRejection>,
) -> Result<Json<CloseTicketResponse>, ApiError> {
    let Json(input) = payload?;
    let (Some(ticket_id), Some(resource_id)) = (input.ticket_id, input.resource_id) else {
        return Err(ApiError::BadRequest("Missing ticketID or resourceID in payload.".into()));
    };

    let archived = state.service.close_and_archive_ticket(&ticket_id, &resource_id)?;

    Ok(Json(CloseTicketResponse {
        success: true,
        message: format!("Ticket {} closed by {}.", ticket_id, resource_id),
        points_awarded: archived.points_awarded,
    }))
}

/// Close the next ticket in the queue with the first engineer (test button)
#[utoipa::path(
    post,
    path = "/api/simulate_closure",
    responses(
        (status = 200, description = "Ticket archived", body = SimulateClosureResponse),
        (status = 404, description = "Queue is empty", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn simulate_closure(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<SimulateClosureResponse>, ApiError> {
    let archived = state.service.simulate_closure()?;

    Ok(Json(SimulateClosureResponse {
        success: true,
        message: format!(
            "SIMULATED: Ticket {} (SkillGroup: {}) closed by {}.",
            archived.id(),
            archived.skill_group_id(),
            archived.resource_id
        ),
        points_awarded: archived.points_awarded,
        leaderboard_status: state.service.calculate_leaderboard(),
    }))
}
