//! Health check endpoints

use axum::{Json, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, body = StatusResponse)),
    tag = "health"
)]
pub async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Dispatching Dashboard API Running".into(),
        message: "Backend logic is main focus".into(),
    })
}
