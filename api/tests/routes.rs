//! HTTP surface tests

use axum::http::StatusCode;
use axum_test::TestServer;
use dispatch_api::{
    build_router, ApiState, InMemoryTicketRepository, Resource, SkillGroup, TicketRepository,
    TicketService, VirtualQueueTicket,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::sync::Arc;

fn server_with(repo: Arc<InMemoryTicketRepository>) -> TestServer {
    let service = TicketService::new(repo, Box::new(StdRng::seed_from_u64(21)));
    TestServer::new(build_router(ApiState::new(Arc::new(service)))).unwrap()
}

/// L1 -> 100, L2 -> 200; R001, R002; T1 (L1, p2), T2 (L2, p1), T3 (L1, p2)
fn seeded_repo() -> Arc<InMemoryTicketRepository> {
    let repo = Arc::new(InMemoryTicketRepository::new());
    repo.add_skill_group(SkillGroup::new("L1", "Line 1 (Easiest)", 100));
    repo.add_skill_group(SkillGroup::new("L2", "Line 2 (Medium)", 200));
    repo.add_resource(Resource::new("R001", "Adela Parkson"));
    repo.add_resource(Resource::new("R002", "Christian Mad"));

    let mut rng = StdRng::seed_from_u64(8);
    for (id, group, priority) in [("T1", "L1", 2), ("T2", "L2", 1), ("T3", "L1", 2)] {
        repo.enqueue_ticket(VirtualQueueTicket::with_id(id, group, priority, 45, &mut rng))
            .unwrap();
    }
    repo
}

fn ticket_ids(body: &Value) -> Vec<String> {
    body["queue"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["ticketID"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_index_and_health() {
    let server = server_with(seeded_repo());

    let index = server.get("/").await;
    index.assert_status_ok();
    assert_eq!(index.json::<Value>()["status"], "Dispatching Dashboard API Running");

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_queue_sorted_by_priority() {
    let server = server_with(seeded_repo());

    let response = server.get("/api/queue").await;
    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(ticket_ids(&body), ["T2", "T1", "T3"]);
    let first = &body["queue"][0];
    assert_eq!(first["skillGroupID"], "L2");
    assert_eq!(first["expected_minutes"], 45);
    assert!(first["created_date"].is_string());
    assert!(first["weighted_importance"].is_f64());
}

#[tokio::test]
async fn test_close_ticket_awards_points() {
    let repo = seeded_repo();
    let server = server_with(repo.clone());

    let response = server
        .post("/api/close_ticket")
        .json(&json!({ "ticketID": "T1", "resourceID": "R002" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["points_awarded"], 100);
    assert_eq!(body["message"], "Ticket T1 closed by R002.");

    let queue: Value = server.get("/api/queue").await.json();
    assert_eq!(ticket_ids(&queue), ["T2", "T3"]);

    let archive: Value = server.get("/api/archive").await.json();
    let archive = archive["archive"].as_array().unwrap();
    assert_eq!(archive.len(), 1);
    assert_eq!(archive[0]["ticketID"], "T1");
    assert_eq!(archive[0]["resourceID"], "R002");
    assert_eq!(archive[0]["status"], "Completed");
    assert_eq!(repo.get_archived_tickets().len(), 1);

    let leaderboard: Value = server.get("/api/leaderboard").await.json();
    assert_eq!(leaderboard["leaderboard"][0]["resourceID"], "R002");
    assert_eq!(leaderboard["leaderboard"][0]["total_points"], 100);
    assert_eq!(leaderboard["leaderboard"][0]["tickets_solved"], 1);
    assert_eq!(leaderboard["leaderboard"][1]["engineer_name"], "Adela Parkson");
    assert_eq!(leaderboard["leaderboard"][1]["total_points"], 0);
}

#[tokio::test]
async fn test_close_ticket_missing_fields() {
    let server = server_with(seeded_repo());

    let response = server
        .post("/api/close_ticket")
        .json(&json!({ "ticketID": "T1" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing ticketID or resourceID in payload.");

    let malformed = server.post("/api/close_ticket").text("not json").await;
    malformed.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_close_unknown_ticket_is_404() {
    let repo = seeded_repo();
    let server = server_with(repo.clone());

    let response = server
        .post("/api/close_ticket")
        .json(&json!({ "ticketID": "missing", "resourceID": "R001" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("missing"));

    assert_eq!(repo.get_virtual_queue_tickets().len(), 3);
    assert!(repo.get_archived_tickets().is_empty());
}

#[tokio::test]
async fn test_close_with_unknown_resource_is_404() {
    let repo = seeded_repo();
    let server = server_with(repo.clone());

    server
        .post("/api/close_ticket")
        .json(&json!({ "ticketID": "T1", "resourceID": "R404" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(repo.get_virtual_queue_tickets().len(), 3);
}

#[tokio::test]
async fn test_close_unscorable_ticket_is_500() {
    let repo = seeded_repo();
    let mut rng = StdRng::seed_from_u64(3);
    repo.enqueue_ticket(VirtualQueueTicket::with_id("VIP1", "VIP", 1, 30, &mut rng))
        .unwrap();
    let server = server_with(repo);

    let response = server
        .post("/api/close_ticket")
        .json(&json!({ "ticketID": "VIP1", "resourceID": "R001" }))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_simulate_closure_until_empty() {
    let server = server_with(seeded_repo());

    let response = server.post("/api/simulate_closure").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["points_awarded"], 200);
    assert_eq!(
        body["message"],
        "SIMULATED: Ticket T2 (SkillGroup: L2) closed by R001."
    );
    assert_eq!(body["leaderboard_status"][0]["resourceID"], "R001");
    assert_eq!(body["leaderboard_status"][0]["total_points"], 200);

    server.post("/api/simulate_closure").await.assert_status_ok();
    server.post("/api/simulate_closure").await.assert_status_ok();

    let empty = server.post("/api/simulate_closure").await;
    empty.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        empty.json::<Value>()["error"],
        "No tickets left in the queue to simulate closure."
    );

    let leaderboard: Value = server.get("/api/leaderboard").await.json();
    assert_eq!(leaderboard["leaderboard"][0]["total_points"], 400);
    assert_eq!(leaderboard["leaderboard"][0]["tickets_solved"], 3);
}

#[tokio::test]
async fn test_directory_listings() {
    let server = server_with(seeded_repo());
    server
        .post("/api/close_ticket")
        .json(&json!({ "ticketID": "T2", "resourceID": "R001" }))
        .await
        .assert_status_ok();

    let groups: Value = server.get("/api/skill_groups").await.json();
    assert_eq!(
        groups["skill_groups"][1],
        json!({ "id": "L2", "name": "Line 2 (Medium)", "points": 200 })
    );

    let resources: Value = server.get("/api/resources").await.json();
    assert_eq!(resources["resources"].as_array().unwrap().len(), 2);

    let coverage: Value = server.get("/api/resource_skill_groups").await.json();
    assert_eq!(
        coverage["resource_skill_groups"],
        json!([{ "id": "RS001", "skillGroupID": "L2", "resourceID": "R001" }])
    );
}

#[tokio::test]
async fn test_openapi_document() {
    let server = server_with(seeded_repo());

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"]["/api/close_ticket"]["post"].is_object());
    assert!(doc["paths"]["/api/leaderboard"]["get"].is_object());
}
