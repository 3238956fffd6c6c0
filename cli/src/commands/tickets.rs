//! Queue and closure commands

use crate::output::OutputFormat;
use super::{leaderboard::LeaderboardRow, ApiClient};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct QueueTicket {
    #[serde(rename = "ticketID")]
    #[tabled(rename = "Ticket")]
    pub id: String,
    #[serde(rename = "skillGroupID")]
    #[tabled(rename = "Skill Group")]
    pub skill_group_id: String,
    #[tabled(rename = "Priority")]
    pub priority: u32,
    #[tabled(rename = "Expected (min)")]
    pub expected_minutes: u32,
    #[tabled(rename = "Created")]
    pub created_date: String,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct ArchivedTicket {
    #[serde(rename = "ticketID")]
    #[tabled(rename = "Ticket")]
    pub id: String,
    #[serde(rename = "skillGroupID")]
    #[tabled(rename = "Skill Group")]
    pub skill_group_id: String,
    #[serde(rename = "resourceID")]
    #[tabled(rename = "Engineer")]
    pub resource_id: String,
    #[tabled(rename = "Actual (min)")]
    pub actual_minutes: u32,
    #[tabled(rename = "Points")]
    pub points_awarded: u32,
    #[tabled(rename = "Completed")]
    pub completed_date: String,
}

#[derive(Debug, Deserialize)]
struct QueueResponse {
    queue: Vec<QueueTicket>,
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    archive: Vec<ArchivedTicket>,
}

#[derive(Debug, Serialize)]
struct CloseRequest<'a> {
    #[serde(rename = "ticketID")]
    ticket_id: &'a str,
    #[serde(rename = "resourceID")]
    resource_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct CloseResponse {
    message: String,
    points_awarded: u32,
}

#[derive(Debug, Deserialize)]
struct SimulateResponse {
    message: String,
    points_awarded: u32,
    leaderboard_status: Vec<LeaderboardRow>,
}

pub async fn queue(
    client: &ApiClient,
    format: OutputFormat,
    skill_group: Option<&str>,
) -> Result<(), String> {
    let resp: QueueResponse = client.get("/api/queue").await?;
    let tickets = resp
        .queue
        .into_iter()
        .filter(|t| skill_group.map_or(true, |g| t.skill_group_id == g))
        .collect();
    format.print::<QueueTicket>(tickets);
    Ok(())
}

pub async fn archive(client: &ApiClient, format: OutputFormat) -> Result<(), String> {
    let resp: ArchiveResponse = client.get("/api/archive").await?;
    format.print(resp.archive);
    Ok(())
}

pub async fn close(client: &ApiClient, ticket_id: &str, resource_id: &str) -> Result<(), String> {
    let body = CloseRequest { ticket_id, resource_id };
    let resp: CloseResponse = client.post("/api/close_ticket", &body).await?;
    println!("{} {} (+{} points)", "✔".green(), resp.message, resp.points_awarded);
    Ok(())
}

pub async fn simulate(client: &ApiClient, format: OutputFormat) -> Result<(), String> {
    let resp: SimulateResponse = client.post("/api/simulate_closure", &()).await?;
    println!("{} {} (+{} points)", "✔".green(), resp.message, resp.points_awarded);
    format.print(resp.leaderboard_status);
    Ok(())
}
