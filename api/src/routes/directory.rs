//! Skill group and engineer listings

use axum::{Router, Json, extract::State};
use axum::routing::get;
use std::sync::Arc;
use crate::{ApiState, models::*};

pub fn router() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/skill_groups", get(list_skill_groups))
        .route("/resources", get(list_resources))
        .route("/resource_skill_groups", get(list_resource_skill_groups))
}

#[utoipa::path(
    get,
    path = "/api/skill_groups",
    responses((status = 200, body = SkillGroupsResponse)),
    tag = "directory"
)]
pub async fn list_skill_groups(State(state): State<Arc<ApiState>>) -> Json<SkillGroupsResponse> {
    Json(SkillGroupsResponse {
        skill_groups: state.service.repository().get_skill_groups(),
    })
}

#[utoipa::path(
    get,
    path = "/api/resources",
    responses((status = 200, body = ResourcesResponse)),
    tag = "directory"
)]
pub async fn list_resources(State(state): State<Arc<ApiState>>) -> Json<ResourcesResponse> {
    Json(ResourcesResponse {
        resources: state.service.repository().get_resources(),
    })
}

/// Skill coverage inferred from closed tickets
#[utoipa::path(
    get,
    path = "/api/resource_skill_groups",
    responses((status = 200, body = ResourceSkillGroupsResponse)),
    tag = "directory"
)]
pub async fn list_resource_skill_groups(
    State(state): State<Arc<ApiState>>,
) -> Json<ResourceSkillGroupsResponse> {
    Json(ResourceSkillGroupsResponse {
        resource_skill_groups: state.service.repository().get_resource_skill_groups(),
    })
}
