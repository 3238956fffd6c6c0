//! Dispatch Models

use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status recorded on every archived ticket.
pub const COMPLETED_STATUS: &str = "Completed";

// ============ Skill Groups ============

/// Skill group (ticket tier) carrying a fixed point value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillGroup {
    pub id: String,
    pub name: String,
    pub points: u32,
}

impl SkillGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: u32) -> Self {
        Self { id: id.into(), name: name.into(), points }
    }
}

// ============ Resources ============

/// Resource (engineer eligible to close tickets)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Resource {
    pub id: String,
    pub name: String,
}

impl Resource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// Skill coverage of a resource, inferred from the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResourceSkillGroup {
    pub id: String,
    #[serde(rename = "skillGroupID")]
    pub skill_group_id: String,
    #[serde(rename = "resourceID")]
    pub resource_id: String,
}

// ============ Tickets ============

/// Ticket waiting in the virtual queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VirtualQueueTicket {
    #[serde(rename = "ticketID")]
    pub id: String,
    #[serde(rename = "skillGroupID")]
    pub skill_group_id: String,
    /// Lower is more urgent
    pub priority: u32,
    pub expected_minutes: u32,
    /// Synthetic demo value in [0.5, 1.5]; nothing orders by it
    pub weighted_importance: f64,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl VirtualQueueTicket {
    /// Create a ticket with a fresh id and a random weighted importance.
    pub fn new(
        skill_group_id: impl Into<String>,
        priority: u32,
        expected_minutes: u32,
        rng: &mut dyn RngCore,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: generate_ticket_id(rng),
            skill_group_id: skill_group_id.into(),
            priority,
            expected_minutes,
            weighted_importance: rng.gen_range(0.5..=1.5),
            created_date: now,
            updated_date: now,
        }
    }

    /// Same as [`VirtualQueueTicket::new`] but with a caller-chosen id.
    pub fn with_id(
        id: impl Into<String>,
        skill_group_id: impl Into<String>,
        priority: u32,
        expected_minutes: u32,
        rng: &mut dyn RngCore,
    ) -> Self {
        Self {
            id: id.into(),
            ..Self::new(skill_group_id, priority, expected_minutes, rng)
        }
    }
}

/// Closed ticket, immutable once written to the archive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArchivedTicket {
    /// Snapshot of the queued ticket as it was when closed
    #[serde(flatten)]
    pub ticket: VirtualQueueTicket,
    #[serde(rename = "resourceID")]
    pub resource_id: String,
    /// Synthetic demo value in [10, expected_minutes + 15]
    pub actual_minutes: u32,
    pub status: String,
    pub is_completed: bool,
    pub completed_date: DateTime<Utc>,
    pub points_awarded: u32,
}

impl ArchivedTicket {
    pub fn close(
        ticket: &VirtualQueueTicket,
        resource_id: impl Into<String>,
        points_awarded: u32,
        rng: &mut dyn RngCore,
    ) -> Self {
        Self {
            ticket: ticket.clone(),
            resource_id: resource_id.into(),
            actual_minutes: rng.gen_range(10..=ticket.expected_minutes.saturating_add(15)),
            status: COMPLETED_STATUS.into(),
            is_completed: true,
            completed_date: Utc::now(),
            points_awarded,
        }
    }

    pub fn id(&self) -> &str {
        &self.ticket.id
    }

    pub fn skill_group_id(&self) -> &str {
        &self.ticket.skill_group_id
    }
}

fn generate_ticket_id(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    uuid.simple().to_string()[..8].to_string()
}

// ============ Leaderboard ============

/// One leaderboard row per known resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub engineer_name: String,
    #[serde(rename = "resourceID")]
    pub resource_id: String,
    pub total_points: u64,
    pub tickets_solved: u64,
}

// ============ Requests / Responses ============

/// Close ticket request; fields are optional so a missing one maps to 400
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CloseTicketRequest {
    #[serde(rename = "ticketID")]
    pub ticket_id: Option<String>,
    #[serde(rename = "resourceID")]
    pub resource_id: Option<String>,
}

/// Close ticket response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CloseTicketResponse {
    pub success: bool,
    pub message: String,
    pub points_awarded: u32,
}

/// Simulated closure response, includes the refreshed leaderboard
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SimulateClosureResponse {
    pub success: bool,
    pub message: String,
    pub points_awarded: u32,
    pub leaderboard_status: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueueResponse {
    pub queue: Vec<VirtualQueueTicket>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArchiveResponse {
    pub archive: Vec<ArchivedTicket>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SkillGroupsResponse {
    pub skill_groups: Vec<SkillGroup>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResourcesResponse {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResourceSkillGroupsResponse {
    pub resource_skill_groups: Vec<ResourceSkillGroup>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
