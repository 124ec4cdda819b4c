//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ParkHubError`] via `#[from]` (or a manual `From` for boxed adapter
//! errors). No variant carries a bare `String` for its cause.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum ParkHubError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistent store failed (connectivity, constraint, decoding, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("slot number must not be empty")]
    EmptySlotNumber,

    #[error("city must not be empty")]
    EmptyCity,

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
