//! Fixed sample locations used to seed a store with demo parking slots.
//!
//! [`SAMPLE_LOCATIONS`] is read-only reference data: eight sites across
//! three cities. Slot `Pk` of a site (prefix `P`, `k` in `1..=count`) sits
//! at `base + k * 0.0001` degrees and `base + k * 50.0` plan units.

use crate::error::ParkHubError;
use crate::slot::{DEFAULT_SECTION, Location, Slot};

/// Geographic offset between consecutive slots of a site, in degrees.
pub const COORDINATE_STEP: f64 = 0.0001;

/// Plan offset between consecutive slots of a site, in plan units.
pub const PLAN_STEP: f64 = 50.0;

/// One sample parking site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleLocation {
    /// Slot number prefix, unique per site.
    pub prefix: &'static str,
    /// Number of slots generated for this site.
    pub count: u32,
    pub city: &'static str,
    pub area: &'static str,
    pub address: &'static str,
    pub place_type: &'static str,
    pub base_latitude: f64,
    pub base_longitude: f64,
    pub base_x: f64,
    pub base_y: f64,
}

/// The eight sample sites, in seeding order.
pub static SAMPLE_LOCATIONS: [SampleLocation; 8] = [
    SampleLocation {
        prefix: "A",
        count: 10,
        city: "Hyderabad",
        area: "Madhapur",
        address: "IKEA Mall",
        place_type: "Shopping Mall",
        base_latitude: 17.4326,
        base_longitude: 78.3808,
        base_x: 100.0,
        base_y: 100.0,
    },
    SampleLocation {
        prefix: "B",
        count: 8,
        city: "Hyderabad",
        area: "Madhapur",
        address: "Inorbit Mall",
        place_type: "Shopping Mall",
        base_latitude: 17.4352,
        base_longitude: 78.3866,
        base_x: 200.0,
        base_y: 100.0,
    },
    SampleLocation {
        prefix: "C",
        count: 12,
        city: "Hyderabad",
        area: "Gachibowli",
        address: "DLF Cyber City",
        place_type: "Office Complex",
        base_latitude: 17.4239,
        base_longitude: 78.3733,
        base_x: 300.0,
        base_y: 100.0,
    },
    SampleLocation {
        prefix: "D",
        count: 15,
        city: "Hyderabad",
        area: "Hitech City",
        address: "Mindspace IT Park",
        place_type: "Office Complex",
        base_latitude: 17.4435,
        base_longitude: 78.3772,
        base_x: 400.0,
        base_y: 100.0,
    },
    SampleLocation {
        prefix: "E",
        count: 10,
        city: "Bangalore",
        area: "Koramangala",
        address: "Forum Mall",
        place_type: "Shopping Mall",
        base_latitude: 12.9352,
        base_longitude: 77.6245,
        base_x: 100.0,
        base_y: 200.0,
    },
    SampleLocation {
        prefix: "F",
        count: 12,
        city: "Bangalore",
        area: "Whitefield",
        address: "Phoenix Marketcity",
        place_type: "Shopping Mall",
        base_latitude: 12.9975,
        base_longitude: 77.6969,
        base_x: 200.0,
        base_y: 200.0,
    },
    SampleLocation {
        prefix: "G",
        count: 8,
        city: "Mumbai",
        area: "Andheri",
        address: "Infinity Mall",
        place_type: "Shopping Mall",
        base_latitude: 19.1136,
        base_longitude: 72.8697,
        base_x: 100.0,
        base_y: 300.0,
    },
    SampleLocation {
        prefix: "H",
        count: 10,
        city: "Mumbai",
        area: "BKC",
        address: "Jio World Drive",
        place_type: "Shopping Mall",
        base_latitude: 19.0653,
        base_longitude: 72.8687,
        base_x: 200.0,
        base_y: 300.0,
    },
];

impl SampleLocation {
    /// Build the slots of this site, numbered `prefix1..=prefix{count}`.
    ///
    /// # Errors
    ///
    /// Returns [`ParkHubError::Validation`] if a generated slot violates a
    /// domain invariant.
    pub fn slots(&self) -> Result<Vec<Slot>, ParkHubError> {
        (1..=self.count).map(|k| self.slot(k)).collect()
    }

    fn slot(&self, index: u32) -> Result<Slot, ParkHubError> {
        let k = f64::from(index);
        Slot::builder()
            .slot_number(format!("{}{index}", self.prefix))
            .is_available(true)
            .city(self.city)
            .area(self.area)
            .address(self.address)
            .place_type(self.place_type)
            .section(DEFAULT_SECTION)
            .coordinates(
                self.base_latitude + k * COORDINATE_STEP,
                self.base_longitude + k * COORDINATE_STEP,
            )
            .location(Location::new(
                self.base_x + k * PLAN_STEP,
                self.base_y + k * PLAN_STEP,
            ))
            .build()
    }
}

/// Build every sample slot, site by site in table order.
///
/// # Errors
///
/// Returns [`ParkHubError::Validation`] if a generated slot violates a
/// domain invariant.
pub fn sample_slots() -> Result<Vec<Slot>, ParkHubError> {
    let mut slots = Vec::with_capacity(sample_slot_count());
    for location in &SAMPLE_LOCATIONS {
        slots.extend(location.slots()?);
    }
    Ok(slots)
}

/// Total number of slots [`sample_slots`] produces.
#[must_use]
pub fn sample_slot_count() -> usize {
    SAMPLE_LOCATIONS
        .iter()
        .map(|location| location.count as usize)
        .sum()
}

/// Distinct cities of the sample table, in first-appearance order.
#[must_use]
pub fn sample_cities() -> Vec<&'static str> {
    let mut cities: Vec<&'static str> = Vec::new();
    for location in &SAMPLE_LOCATIONS {
        if !cities.contains(&location.city) {
            cities.push(location.city);
        }
    }
    cities
}
