//! Leaderboard and directory commands

use crate::output::OutputFormat;
use super::ApiClient;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct LeaderboardRow {
    #[tabled(rename = "Engineer")]
    pub engineer_name: String,
    #[serde(rename = "resourceID")]
    #[tabled(rename = "ID")]
    pub resource_id: String,
    #[tabled(rename = "Points")]
    pub total_points: u64,
    #[tabled(rename = "Solved")]
    pub tickets_solved: u64,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct SkillGroup {
    pub id: String,
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Serialize, Deserialize, Tabled)]
pub struct Engineer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct LeaderboardResponse {
    leaderboard: Vec<LeaderboardRow>,
}

#[derive(Debug, Deserialize)]
struct SkillGroupsResponse {
    skill_groups: Vec<SkillGroup>,
}

#[derive(Debug, Deserialize)]
struct ResourcesResponse {
    resources: Vec<Engineer>,
}

pub async fn show(client: &ApiClient, format: OutputFormat) -> Result<(), String> {
    let resp: LeaderboardResponse = client.get("/api/leaderboard").await?;
    format.print(resp.leaderboard);
    Ok(())
}

pub async fn skills(client: &ApiClient, format: OutputFormat) -> Result<(), String> {
    let resp: SkillGroupsResponse = client.get("/api/skill_groups").await?;
    format.print(resp.skill_groups);
    Ok(())
}

pub async fn engineers(client: &ApiClient, format: OutputFormat) -> Result<(), String> {
    let resp: ResourcesResponse = client.get("/api/resources").await?;
    format.print(resp.resources);
    Ok(())
}
