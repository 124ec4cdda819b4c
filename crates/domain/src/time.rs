//! Timestamp type and its text encoding.
//!
//! Records carry a UTC [`Timestamp`]. Adapters that persist timestamps as
//! text go through [`to_rfc3339`] and [`parse_rfc3339`] so every store
//! uses the same encoding.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp attached to persisted records.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Encode a timestamp as RFC 3339 with microsecond precision.
#[must_use]
pub fn to_rfc3339(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode an RFC 3339 string into a UTC timestamp.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when `value` is not valid RFC 3339.
pub fn parse_rfc3339(value: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.to_utc())
}
