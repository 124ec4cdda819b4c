//! Slot service — read-side use-cases for parking slots.

use parkhub_domain::error::{NotFoundError, ParkHubError};
use parkhub_domain::id::SlotId;
use parkhub_domain::slot::Slot;

use crate::ports::SlotRepository;

/// Application service for querying slots.
pub struct SlotService<R> {
    repo: R,
}

impl<R: SlotRepository> SlotService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List slots, optionally restricted to one city.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_slots(&self, city: Option<&str>) -> Result<Vec<Slot>, ParkHubError> {
        match city {
            Some(city) => self.repo.find_by_city(city).await,
            None => self.repo.get_all().await,
        }
    }

    /// Look up a slot by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ParkHubError::NotFound`] when no slot with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_slot(&self, id: SlotId) -> Result<Slot, ParkHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Slot",
                id: id.to_string(),
            }
            .into()
        })
    }
}
