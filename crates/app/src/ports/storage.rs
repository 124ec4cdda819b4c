//! Storage port — repository trait for slot persistence.

use std::future::Future;

use parkhub_domain::error::ParkHubError;
use parkhub_domain::id::SlotId;
use parkhub_domain::slot::Slot;

/// Repository for persisting and querying [`Slot`]s.
///
/// Each call is expected to be atomic on its own; no guarantee spans
/// several calls.
pub trait SlotRepository {
    /// Number of stored slots.
    fn count(&self) -> impl Future<Output = Result<u64, ParkHubError>> + Send;

    /// Remove every stored slot.
    fn delete_all(&self) -> impl Future<Output = Result<(), ParkHubError>> + Send;

    /// Insert a batch of slots in one call.
    fn save_all(&self, slots: Vec<Slot>) -> impl Future<Output = Result<(), ParkHubError>> + Send;

    /// All stored slots, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Slot>, ParkHubError>> + Send;

    /// Slots whose city equals `city` exactly, in insertion order.
    fn find_by_city(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Vec<Slot>, ParkHubError>> + Send;

    /// Get a slot by its unique identifier.
    fn get_by_id(
        &self,
        id: SlotId,
    ) -> impl Future<Output = Result<Option<Slot>, ParkHubError>> + Send;
}
