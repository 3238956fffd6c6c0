//! Virtual queue and archive endpoints

use axum::{Router, Json, extract::State};
use axum::routing::get;
use std::sync::Arc;
use crate::{ApiState, models::*};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/queue", get(get_queue))
        .route("/archive", get(get_archive))
}

/// Live tickets, most urgent first
#[utoipa::path(
    get,
    path = "/api/queue",
    responses((status = 200, description = "Tickets by ascending priority", body = QueueResponse)),
    tag = "queue"
)]
pub async fn get_queue(State(state): State<Arc<ApiState>>) -> Json<QueueResponse> {
    Json(QueueResponse {
        queue: state.service.repository().get_virtual_queue_tickets(),
    })
}

/// Closed tickets
#[utoipa::path(
    get,
    path = "/api/archive",
    responses((status = 200, body = ArchiveResponse)),
    tag = "queue"
)]
pub async fn get_archive(State(state): State<Arc<ApiState>>) -> Json<ArchiveResponse> {
    Json(ArchiveResponse {
        archive: state.service.repository().get_archived_tickets(),
    })
}
