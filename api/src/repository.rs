//! Ticket repository - data access contract and in-memory store

use crate::models::{ArchivedTicket, Resource, ResourceSkillGroup, SkillGroup, VirtualQueueTicket};
use parking_lot::RwLock;
use std::collections::HashSet;

/// Repository result type
pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Data access contract for skill groups, resources, the live queue and the archive
pub trait TicketRepository: Send + Sync {
    /// All skill groups, insertion order
    fn get_skill_groups(&self) -> Vec<SkillGroup>;

    /// All resources, insertion order
    fn get_resources(&self) -> Vec<Resource>;

    /// Live tickets by ascending priority; equal priorities keep insertion order
    fn get_virtual_queue_tickets(&self) -> Vec<VirtualQueueTicket>;

    /// Ticket currently in the queue
    fn get_ticket_by_id(&self, ticket_id: &str) -> RepoResult<VirtualQueueTicket>;

    /// Drop a ticket from the live queue
    fn remove_ticket_from_queue(&self, ticket_id: &str) -> RepoResult<()>;

    /// Append a closed ticket to the archive
    fn archive_ticket(&self, ticket: ArchivedTicket);

    /// Every archived ticket, archive order
    fn get_archived_tickets(&self) -> Vec<ArchivedTicket>;

    /// Unique (resource, skill group) pairs seen in the archive
    fn get_resource_skill_groups(&self) -> Vec<ResourceSkillGroup>;

    /// Insert or replace a skill group
    fn add_skill_group(&self, skill_group: SkillGroup);

    /// Insert or replace a resource
    fn add_resource(&self, resource: Resource);

    /// Put a new ticket on the queue
    fn enqueue_ticket(&self, ticket: VirtualQueueTicket) -> RepoResult<()>;
}

#[derive(Default)]
struct Store {
    skill_groups: Vec<SkillGroup>,
    resources: Vec<Resource>,
    queue: Vec<VirtualQueueTicket>,
    archive: Vec<ArchivedTicket>,
}

/// In-memory repository; one lock guards every collection
pub struct InMemoryTicketRepository {
    store: RwLock<Store>,
}

impl InMemoryTicketRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryTicketRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketRepository for InMemoryTicketRepository {
    fn get_skill_groups(&self) -> Vec<SkillGroup> {
        self.store.read().skill_groups.clone()
    }

    fn get_resources(&self) -> Vec<Resource> {
        self.store.read().resources.clone()
    }

    fn get_virtual_queue_tickets(&self) -> Vec<VirtualQueueTicket> {
        let mut tickets = self.store.read().queue.clone();
        // stable sort
        tickets.sort_by_key(|t| t.priority);
        tickets
    }

    fn get_ticket_by_id(&self, ticket_id: &str) -> RepoResult<VirtualQueueTicket> {
        self.store
            .read()
            .queue
            .iter()
            .find(|t| t.id == ticket_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Ticket ID {ticket_id} not found in queue"))
            })
    }

    fn remove_ticket_from_queue(&self, ticket_id: &str) -> RepoResult<()> {
        let mut store = self.store.write();
        let index = store
            .queue
            .iter()
            .position(|t| t.id == ticket_id)
            .ok_or_else(|| {
                let msg = format!("Ticket ID {ticket_id} not found in queue for removal");
                RepositoryError::NotFound(msg)
            })?;
        store.queue.remove(index);
        Ok(())
    }

    fn archive_ticket(&self, ticket: ArchivedTicket) {
        self.store.write().archive.push(ticket);
    }

    fn get_archived_tickets(&self) -> Vec<ArchivedTicket> {
        self.store.read().archive.clone()
    }

    fn get_resource_skill_groups(&self) -> Vec<ResourceSkillGroup> {
        let store = self.store.read();
        let mut seen = HashSet::new();
        let mut rows = Vec::new();

        for archived in &store.archive {
            let key = (archived.resource_id.as_str(), archived.skill_group_id());
            if seen.insert(key) {
                rows.push(ResourceSkillGroup {
                    id: format!("RS{:03}", rows.len() + 1),
                    skill_group_id: archived.skill_group_id().to_string(),
                    resource_id: archived.resource_id.clone(),
                });
            }
        }
        rows
    }

    fn add_skill_group(&self, skill_group: SkillGroup) {
        let mut store = self.store.write();
        match store.skill_groups.iter_mut().find(|s| s.id == skill_group.id) {
            Some(existing) => *existing = skill_group,
            None => store.skill_groups.push(skill_group),
        }
    }

    fn add_resource(&self, resource: Resource) {
        let mut store = self.store.write();
        match store.resources.iter_mut().find(|r| r.id == resource.id) {
            Some(existing) => *existing = resource,
            None => store.resources.push(resource),
        }
    }

    fn enqueue_ticket(&self, ticket: VirtualQueueTicket) -> RepoResult<()> {
        let mut store = self.store.write();
        if store.queue.iter().any(|t| t.id == ticket.id) {
            return Err(RepositoryError::Conflict(format!(
                "Ticket ID {} already queued",
                ticket.id
            )));
        }
        store.queue.push(ticket);
        Ok(())
    }
}
