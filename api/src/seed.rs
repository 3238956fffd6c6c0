//! Demo data generator

use crate::config::DispatchConfig;
use crate::models::{ArchivedTicket, VirtualQueueTicket};
use crate::repository::{RepositoryError, TicketRepository};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Fill `repo` with the configured skill groups and resources, a random queue
/// and a random archive history.
pub fn populate(
    repo: &dyn TicketRepository,
    config: &DispatchConfig,
    rng: &mut dyn RngCore,
) -> Result<(), RepositoryError> {
    for skill_group in &config.skill_groups {
        repo.add_skill_group(skill_group.clone());
    }
    for resource in &config.resources {
        repo.add_resource(resource.clone());
    }

    if config.skill_groups.is_empty() {
        tracing::warn!("no skill groups configured, skipping ticket seeding");
        return Ok(());
    }

    let mut queued = 0;
    while queued < config.seed.queue_tickets {
        let Some(group) = config.skill_groups.choose(rng) else { break };
        let ticket = VirtualQueueTicket::new(
            group.id.clone(),
            rng.gen_range(1..=5),
            rng.gen_range(30..=120),
            rng,
        );
        match repo.enqueue_ticket(ticket) {
            Ok(()) => queued += 1,
            // id collision, draw again
            Err(RepositoryError::Conflict(_)) => continue,
            Err(e) => return Err(e),
        }
    }

    if !config.resources.is_empty() {
        for _ in 0..config.seed.archived_tickets {
            let (Some(group), Some(engineer)) =
                (config.skill_groups.choose(rng), config.resources.choose(rng))
            else {
                break;
            };
            let dummy = VirtualQueueTicket::new(group.id.clone(), 3, 60, rng);
            let archived = ArchivedTicket::close(&dummy, engineer.id.clone(), group.points, rng);
            repo.archive_ticket(archived);
        }
    }

    tracing::info!(
        skill_groups = config.skill_groups.len(),
        resources = config.resources.len(),
        queued,
        archived = repo.get_archived_tickets().len(),
        "mock data initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryTicketRepository;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_populate_counts_and_ranges() {
        let repo = InMemoryTicketRepository::new();
        let config = DispatchConfig::default();
        populate(&repo, &config, &mut StdRng::seed_from_u64(99)).unwrap();

        assert_eq!(repo.get_skill_groups().len(), 3);
        assert_eq!(repo.get_resources().len(), 4);

        let queue = repo.get_virtual_queue_tickets();
        assert_eq!(queue.len(), 40);
        assert!(queue.iter().all(|t| (1..=5).contains(&t.priority)));
        assert!(queue.iter().all(|t| (30..=120).contains(&t.expected_minutes)));
        assert!(queue.windows(2).all(|w| w[0].priority <= w[1].priority));

        let archive = repo.get_archived_tickets();
        assert_eq!(archive.len(), 15);
        for archived in &archive {
            let group = config
                .skill_groups
                .iter()
                .find(|g| g.id == archived.skill_group_id())
                .unwrap();
            assert_eq!(archived.points_awarded, group.points);
            assert!(config.resources.iter().any(|r| r.id == archived.resource_id));
            assert!(queue.iter().all(|t| t.id != archived.id()));
        }
    }

    #[test]
    fn test_populate_is_reproducible() {
        let first = InMemoryTicketRepository::new();
        let second = InMemoryTicketRepository::new();
        let config = DispatchConfig::default();
        populate(&first, &config, &mut StdRng::seed_from_u64(5)).unwrap();
        populate(&second, &config, &mut StdRng::seed_from_u64(5)).unwrap();

        let ids = |repo: &InMemoryTicketRepository| -> Vec<String> {
            repo.get_virtual_queue_tickets().into_iter().map(|t| t.id).collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_populate_without_skill_groups() {
        let repo = InMemoryTicketRepository::new();
        let config = DispatchConfig {
            skill_groups: Vec::new(),
            ..DispatchConfig::default()
        };
        populate(&repo, &config, &mut StdRng::seed_from_u64(1)).unwrap();

        assert!(repo.get_virtual_queue_tickets().is_empty());
        assert!(repo.get_archived_tickets().is_empty());
        assert_eq!(repo.get_resources().len(), 4);
    }
}
