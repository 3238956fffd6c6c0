//! Ticket service - scoring, closing and leaderboard aggregation

use crate::models::{ArchivedTicket, LeaderboardEntry, VirtualQueueTicket};
use crate::repository::{RepositoryError, TicketRepository};
use parking_lot::Mutex;
use rand::RngCore;
use std::collections::HashMap;
use std::sync::Arc;

/// Resource used by a simulated closure when none are known
pub const DEFAULT_SIMULATION_RESOURCE: &str = "R001";

/// Service errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no points configured for skill group {0}")]
    UnknownSkillGroup(String),

    #[error("No tickets left in the queue to simulate closure.")]
    QueueEmpty,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Business logic over a [`TicketRepository`]
pub struct TicketService {
    repo: Arc<dyn TicketRepository>,
    points: HashMap<String, u32>,
    /// Synthetic-field source. Held for the whole close so find/archive/remove
    /// never interleave between requests.
    writer: Mutex<Box<dyn RngCore + Send>>,
}

impl TicketService {
    /// Build the service; the points table is snapshotted from the current skill groups.
    pub fn new(repo: Arc<dyn TicketRepository>, rng: Box<dyn RngCore + Send>) -> Self {
        let points = repo
            .get_skill_groups()
            .into_iter()
            .map(|sg| (sg.id, sg.points))
            .collect();

        Self {
            repo,
            points,
            writer: Mutex::new(rng),
        }
    }

    pub fn repository(&self) -> &Arc<dyn TicketRepository> {
        &self.repo
    }

    /// Points for a skill group, falling back to `numeric suffix * 100`
    /// when the group was unknown at construction time.
    pub fn get_points_for_skill_group(&self, skill_group_id: &str) -> ServiceResult<u32> {
        if let Some(points) = self.points.get(skill_group_id) {
            return Ok(*points);
        }

        let fallback = numeric_suffix(skill_group_id)
            .and_then(|n| n.checked_mul(100))
            .ok_or_else(|| ServiceError::UnknownSkillGroup(skill_group_id.to_string()))?;
        tracing::warn!(
            skill_group_id,
            fallback,
            "skill group missing from points table, using suffix fallback"
        );
        Ok(fallback)
    }

    /// Move a ticket from the queue to the archive, crediting `resource_id`.
    pub fn close_and_archive_ticket(
        &self,
        ticket_id: &str,
        resource_id: &str,
    ) -> ServiceResult<ArchivedTicket> {
        let mut rng = self.writer.lock();

        let ticket = self.repo.get_ticket_by_id(ticket_id)?;
        if !self.repo.get_resources().iter().any(|r| r.id == resource_id) {
            let msg = format!("Resource ID {resource_id} not found");
            return Err(RepositoryError::NotFound(msg).into());
        }

        self.archive_locked(&mut **rng, &ticket, resource_id)
    }

    /// Close the most urgent ticket with the first known resource, or
    /// [`DEFAULT_SIMULATION_RESOURCE`] when none are known.
    pub fn simulate_closure(&self) -> ServiceResult<ArchivedTicket> {
        let mut rng = self.writer.lock();

        let next = self
            .repo
            .get_virtual_queue_tickets()
            .into_iter()
            .next()
            .ok_or(ServiceError::QueueEmpty)?;

        let resource_id = self
            .repo
            .get_resources()
            .into_iter()
            .next()
            .map(|r| r.id)
            .unwrap_or_else(|| DEFAULT_SIMULATION_RESOURCE.to_string());

        self.archive_locked(&mut **rng, &next, &resource_id)
    }

    /// Score, archive and dequeue `ticket`. Callers hold the writer lock.
    fn archive_locked(
        &self,
        rng: &mut dyn RngCore,
        ticket: &VirtualQueueTicket,
        resource_id: &str,
    ) -> ServiceResult<ArchivedTicket> {
        let ticket_id = ticket.id.as_str();
        let points = self.get_points_for_skill_group(&ticket.skill_group_id)?;
        let archived = ArchivedTicket::close(ticket, resource_id, points, rng);

        self.repo.archive_ticket(archived.clone());

        // No rollback: the archive entry stays if removal fails.
        if let Err(e) = self.repo.remove_ticket_from_queue(ticket_id) {
            tracing::error!(
                ticket_id,
                error = %e,
                "ticket archived but could not be removed from queue"
            );
            return Err(e.into());
        }

        tracing::info!(ticket_id, resource_id, points, "ticket closed");
        Ok(archived)
    }

    /// Per-resource totals, highest points first.
    pub fn calculate_leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut scores: HashMap<String, u64> = HashMap::new();
        let mut solved: HashMap<String, u64> = HashMap::new();

        for ticket in self.repo.get_archived_tickets() {
            let points = u64::from(ticket.points_awarded);
            *scores.entry(ticket.resource_id.clone()).or_default() += points;
            *solved.entry(ticket.resource_id).or_default() += 1;
        }

        let mut leaderboard: Vec<_> = self
            .repo
            .get_resources()
            .into_iter()
            .map(|resource| LeaderboardEntry {
                total_points: scores.get(&resource.id).copied().unwrap_or(0),
                tickets_solved: solved.get(&resource.id).copied().unwrap_or(0),
                engineer_name: resource.name,
                resource_id: resource.id,
            })
            .collect();

        leaderboard.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.resource_id.cmp(&b.resource_id))
        });
        leaderboard
    }
}

fn numeric_suffix(id: &str) -> Option<u32> {
    let digits = id.len() - id.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    id[id.len() - digits..].parse().ok()
}
