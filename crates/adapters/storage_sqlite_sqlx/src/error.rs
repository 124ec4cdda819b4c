//! Storage-specific error type wrapping sqlx errors.

use parkhub_domain::error::ParkHubError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query, transaction or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// The store reported a row count that cannot be a count.
    #[error("invalid row count {0}")]
    InvalidCount(i64),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for ParkHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
