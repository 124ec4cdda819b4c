//! In-memory [`SlotRepository`] shared by the service tests.

use std::sync::Mutex;

use parkhub_domain::error::ParkHubError;
use parkhub_domain::id::SlotId;
use parkhub_domain::slot::Slot;

use crate::ports::SlotRepository;

/// Records every port call so tests can assert on ordering.
///
/// When `fail_on` names a port method, that call is recorded and then
/// fails with a storage error without touching the stored slots.
#[derive(Default)]
pub(crate) struct InMemorySlotRepo {
    pub slots: Mutex<Vec<Slot>>,
    pub calls: Mutex<Vec<&'static str>>,
    pub fail_on: Option<&'static str>,
}

impl InMemorySlotRepo {
    pub fn with_slots(slots: Vec<Slot>) -> Self {
        Self {
            slots: Mutex::new(slots),
            ..Self::default()
        }
    }

    pub fn failing_on(self, call: &'static str) -> Self {
        Self {
            fail_on: Some(call),
            ..self
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), ParkHubError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(call) {
            return Err(ParkHubError::Storage(Box::new(std::io::Error::other(
                "store unavailable",
            ))));
        }
        Ok(())
    }
}

impl SlotRepository for InMemorySlotRepo {
    async fn count(&self) -> Result<u64, ParkHubError> {
        self.record("count")?;
        Ok(self.slots.lock().unwrap().len() as u64)
    }

    async fn delete_all(&self) -> Result<(), ParkHubError> {
        self.record("delete_all")?;
        self.slots.lock().unwrap().clear();
        Ok(())
    }

    async fn save_all(&self, slots: Vec<Slot>) -> Result<(), ParkHubError> {
        self.record("save_all")?;
        self.slots.lock().unwrap().extend(slots);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Slot>, ParkHubError> {
        self.record("get_all")?;
        Ok(self.slots.lock().unwrap().clone())
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Slot>, ParkHubError> {
        self.record("find_by_city")?;
        Ok(self
            .slots
            .lock()
            .unwrap()
            .iter()
            .filter(|slot| slot.city == city)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: SlotId) -> Result<Option<Slot>, ParkHubError> {
        self.record("get_by_id")?;
        Ok(self
            .slots
            .lock()
            .unwrap()
            .iter()
            .find(|slot| slot.id == id)
            .cloned())
    }
}

/// A minimal valid slot for pre-populating a store.
pub(crate) fn existing_slot(number: &str, city: &str) -> Slot {
    Slot::builder()
        .slot_number(number)
        .city(city)
        .build()
        .unwrap()
}
