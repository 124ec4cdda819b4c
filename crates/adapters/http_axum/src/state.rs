//! Shared application state for axum handlers.

use std::sync::Arc;

use parkhub_app::ports::SlotRepository;
use parkhub_app::services::seed_service::SeedService;
use parkhub_app::services::slot_service::SlotService;

/// Application state shared across all axum handlers.
///
/// Generic over the slot repository to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Sample data seeding service.
    pub seed_service: Arc<SeedService<R>>,
    /// Slot query service.
    pub slot_service: Arc<SlotService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            seed_service: Arc::clone(&self.seed_service),
            slot_service: Arc::clone(&self.slot_service),
        }
    }
}

impl<R> AppState<R>
where
    R: SlotRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(seed_service: SeedService<R>, slot_service: SlotService<R>) -> Self {
        Self {
            seed_service: Arc::new(seed_service),
            slot_service: Arc::new(slot_service),
        }
    }
}
