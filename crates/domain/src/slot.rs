//! Slot — a single parking space with its place, coordinates and availability.

use serde::{Deserialize, Serialize};

use crate::error::{ParkHubError, ValidationError};
use crate::id::SlotId;
use crate::time::{Timestamp, now};

/// Section assigned to slots that belong to no named section.
pub const DEFAULT_SECTION: &str = "General";

/// Position on the site plan, in plan units (not geographic).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A parking slot.
///
/// Serialized with camelCase keys (`slotNumber`, `isAvailable`, …), which is
/// the shape API clients consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: SlotId,
    pub slot_number: String,
    pub is_available: bool,
    pub city: String,
    pub area: String,
    pub address: String,
    pub place_type: String,
    pub section: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location: Location,
    pub created_at: Timestamp,
}

impl Slot {
    /// Create a builder for constructing a [`Slot`].
    #[must_use]
    pub fn builder() -> SlotBuilder {
        SlotBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ParkHubError::Validation`] when `slot_number` or `city` is
    /// empty, or when the geographic coordinates are out of range.
    pub fn validate(&self) -> Result<(), ParkHubError> {
        if self.slot_number.is_empty() {
            return Err(ValidationError::EmptySlotNumber.into());
        }
        if self.city.is_empty() {
            return Err(ValidationError::EmptyCity.into());
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude).into());
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Slot`].
///
/// Unset fields default to: a fresh id, available, section
/// [`DEFAULT_SECTION`], coordinates `0.0`, and `created_at` = now.
#[derive(Debug, Default)]
pub struct SlotBuilder {
    id: Option<SlotId>,
    slot_number: Option<String>,
    is_available: Option<bool>,
    city: Option<String>,
    area: Option<String>,
    address: Option<String>,
    place_type: Option<String>,
    section: Option<String>,
    latitude: f64,
    longitude: f64,
    location: Location,
    created_at: Option<Timestamp>,
}

impl SlotBuilder {
    #[must_use]
    pub fn id(mut self, id: SlotId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn slot_number(mut self, slot_number: impl Into<String>) -> Self {
        self.slot_number = Some(slot_number.into());
        self
    }

    #[must_use]
    pub fn is_available(mut self, is_available: bool) -> Self {
        self.is_available = Some(is_available);
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn place_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }

    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Slot`].
    ///
    /// # Errors
    ///
    /// Returns [`ParkHubError::Validation`] if any invariant checked by
    /// [`Slot::validate`] fails.
    pub fn build(self) -> Result<Slot, ParkHubError> {
        let slot = Slot {
            id: self.id.unwrap_or_default(),
            slot_number: self.slot_number.unwrap_or_default(),
            is_available: self.is_available.unwrap_or(true),
            city: self.city.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            place_type: self.place_type.unwrap_or_default(),
            section: self
                .section
                .unwrap_or_else(|| DEFAULT_SECTION.to_string()),
            latitude: self.latitude,
            longitude: self.longitude,
            location: self.location,
            created_at: self.created_at.unwrap_or_else(now),
        };
        slot.validate()?;
        Ok(slot)
    }
}
