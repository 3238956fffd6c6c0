//! Leaderboard endpoint

use axum::{Router, Json, extract::State};
use axum::routing::get;
use std::sync::Arc;
use crate::{ApiState, models::*};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}

/// Gamified leaderboard: total points per engineer from archived tickets
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Rows by descending points", body = LeaderboardResponse)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(state): State<Arc<ApiState>>) -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        leaderboard: state.service.calculate_leaderboard(),
    })
}
