//! Seed service — fills the slot store with the sample location table.
//!
//! Seeding is skipped when the store already holds slots, unless `force`
//! is set, in which case every stored slot is deleted first.

use parkhub_domain::error::ParkHubError;
use parkhub_domain::sample::{SAMPLE_LOCATIONS, sample_cities, sample_slots};

use crate::ports::SlotRepository;

/// Result of a seeding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held slots and `force` was not set; nothing written.
    AlreadySeeded { existing_count: u64 },
    /// The sample slots were written.
    Seeded {
        total_slots: usize,
        cities: Vec<String>,
        locations: usize,
    },
}

/// Application service that seeds the sample parking slots.
pub struct SeedService<R> {
    repo: R,
}

impl<R: SlotRepository> SeedService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Ensure sample slots exist, overwriting existing ones when `force` is set.
    ///
    /// With `force`, all stored slots are deleted before the insert, even
    /// when the store is already empty. Concurrent forced calls are not
    /// serialized.
    ///
    /// # Errors
    ///
    /// Returns [`ParkHubError::Storage`] if counting, deleting or inserting
    /// fails. Nothing is retried.
    #[tracing::instrument(skip(self))]
    pub async fn seed_sample_data(&self, force: bool) -> Result<SeedOutcome, ParkHubError> {
        let existing_count = self.repo.count().await?;
        if existing_count > 0 && !force {
            tracing::info!(existing_count, "slots already present, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded { existing_count });
        }

        if force {
            self.repo.delete_all().await?;
            tracing::debug!(deleted = existing_count, "cleared slot store");
        }

        let slots = sample_slots()?;
        let total_slots = slots.len();
        self.repo.save_all(slots).await?;
        tracing::info!(total_slots, "seeded sample slots");

        Ok(SeedOutcome::Seeded {
            total_slots,
            cities: sample_cities().into_iter().map(String::from).collect(),
            locations: SAMPLE_LOCATIONS.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::services::testing::{InMemorySlotRepo, existing_slot};

    fn five_existing() -> InMemorySlotRepo {
        InMemorySlotRepo::with_slots(
            (1..=5)
                .map(|i| existing_slot(&format!("X{i}"), "Pune"))
                .collect(),
        )
    }

    #[tokio::test]
    async fn should_seed_empty_store_without_force() {
        let svc = SeedService::new(InMemorySlotRepo::default());

        let outcome = svc.seed_sample_data(false).await.unwrap();

        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                total_slots: 85,
                cities: vec![
                    "Hyderabad".to_string(),
                    "Bangalore".to_string(),
                    "Mumbai".to_string()
                ],
                locations: 8,
            }
        );
        assert_eq!(svc.repo.slots.lock().unwrap().len(), 85);
        assert_eq!(svc.repo.calls(), vec!["count", "save_all"]);
    }

    #[tokio::test]
    async fn should_skip_when_store_has_slots_and_no_force() {
        let svc = SeedService::new(five_existing());

        let outcome = svc.seed_sample_data(false).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadySeeded { existing_count: 5 });
        assert_eq!(svc.repo.calls(), vec!["count"]);
        assert_eq!(svc.repo.slots.lock().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn should_replace_existing_slots_when_forced() {
        let svc = SeedService::new(five_existing());

        let outcome = svc.seed_sample_data(true).await.unwrap();

        assert!(matches!(outcome, SeedOutcome::Seeded { total_slots: 85, .. }));
        assert_eq!(svc.repo.calls(), vec!["count", "delete_all", "save_all"]);
        let slots = svc.repo.slots.lock().unwrap();
        assert_eq!(slots.len(), 85);
        assert!(slots.iter().all(|slot| slot.city != "Pune"));
    }

    #[tokio::test]
    async fn should_delete_before_insert_when_forced_on_empty_store() {
        let svc = SeedService::new(InMemorySlotRepo::default());

        svc.seed_sample_data(true).await.unwrap();

        assert_eq!(svc.repo.calls(), vec!["count", "delete_all", "save_all"]);
    }

    #[tokio::test]
    async fn should_write_distinct_available_slots_across_eight_sites() {
        let svc = SeedService::new(InMemorySlotRepo::default());

        svc.seed_sample_data(true).await.unwrap();

        let slots = svc.repo.slots.lock().unwrap();
        let numbers: HashSet<&str> = slots.iter().map(|s| s.slot_number.as_str()).collect();
        let sites: HashSet<&str> = slots.iter().map(|s| s.address.as_str()).collect();
        let cities: HashSet<&str> = slots.iter().map(|s| s.city.as_str()).collect();
        assert_eq!(numbers.len(), 85);
        assert_eq!(sites.len(), 8);
        assert_eq!(cities.len(), 3);
        assert!(slots.iter().all(|s| s.is_available));
    }

    #[tokio::test]
    async fn should_duplicate_nothing_when_run_twice_without_force() {
        let svc = SeedService::new(InMemorySlotRepo::default());

        svc.seed_sample_data(false).await.unwrap();
        let second = svc.seed_sample_data(false).await.unwrap();

        assert_eq!(second, SeedOutcome::AlreadySeeded { existing_count: 85 });
        assert_eq!(svc.repo.slots.lock().unwrap().len(), 85);
    }

    #[tokio::test]
    async fn should_propagate_count_failure() {
        let svc = SeedService::new(InMemorySlotRepo::default().failing_on("count"));

        let result = svc.seed_sample_data(true).await;

        assert!(matches!(result, Err(ParkHubError::Storage(_))));
        assert_eq!(svc.repo.calls(), vec!["count"]);
    }

    #[tokio::test]
    async fn should_propagate_delete_failure_without_inserting() {
        let svc = SeedService::new(five_existing().failing_on("delete_all"));

        let result = svc.seed_sample_data(true).await;

        assert!(matches!(result, Err(ParkHubError::Storage(_))));
        assert_eq!(svc.repo.calls(), vec!["count", "delete_all"]);
        let slots = svc.repo.slots.lock().unwrap();
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().all(|slot| slot.city == "Pune"));
    }

    #[tokio::test]
    async fn should_propagate_insert_failure_after_delete() {
        let svc = SeedService::new(five_existing().failing_on("save_all"));

        let result = svc.seed_sample_data(true).await;

        assert!(matches!(result, Err(ParkHubError::Storage(_))));
        assert_eq!(svc.repo.calls(), vec!["count", "delete_all", "save_all"]);
        assert!(svc.repo.slots.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_insert_failure_on_empty_store_without_force() {
        let svc = SeedService::new(InMemorySlotRepo::default().failing_on("save_all"));

        let result = svc.seed_sample_data(false).await;

        assert!(matches!(result, Err(ParkHubError::Storage(_))));
        assert_eq!(svc.repo.calls(), vec!["count", "save_all"]);
        assert!(svc.repo.slots.lock().unwrap().is_empty());
    }
}
