//! `SQLite` implementation of [`SlotRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, Sqlite, SqlitePool, Transaction};

use parkhub_app::ports::SlotRepository;
use parkhub_domain::error::ParkHubError;
use parkhub_domain::id::SlotId;
use parkhub_domain::slot::{Location, Slot};
use parkhub_domain::time::{parse_rfc3339, to_rfc3339};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Slot`].
struct Wrapper(Slot);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Slot> {
        value.map(|w| w.0)
    }

    fn unwrap_all(rows: Vec<Self>) -> Vec<Slot> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;

        let id = SlotId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at =
            parse_rfc3339(&created_at).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Slot {
            id,
            slot_number: row.try_get("slot_number")?,
            is_available: row.try_get("is_available")?,
            city: row.try_get("city")?,
            area: row.try_get("area")?,
            address: row.try_get("address")?,
            place_type: row.try_get("place_type")?,
            section: row.try_get("section")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            location: Location::new(row.try_get("location_x")?, row.try_get("location_y")?),
            created_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO slots (
        id, slot_number, is_available, city, area, address, place_type, section,
        latitude, longitude, location_x, location_y, created_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const COUNT: &str = "SELECT COUNT(*) FROM slots";
const DELETE_ALL: &str = "DELETE FROM slots";
const SELECT_ALL: &str = "SELECT * FROM slots ORDER BY rowid";
const SELECT_BY_CITY: &str = "SELECT * FROM slots WHERE city = ? ORDER BY rowid";
const SELECT_BY_ID: &str = "SELECT * FROM slots WHERE id = ?";

async fn insert_batch(tx: &mut Transaction<'_, Sqlite>, slots: &[Slot]) -> Result<(), sqlx::Error> {
    for slot in slots {
        sqlx::query(INSERT)
            .bind(slot.id.to_string())
            .bind(&slot.slot_number)
            .bind(slot.is_available)
            .bind(&slot.city)
            .bind(&slot.area)
            .bind(&slot.address)
            .bind(&slot.place_type)
            .bind(&slot.section)
            .bind(slot.latitude)
            .bind(slot.longitude)
            .bind(slot.location.x)
            .bind(slot.location.y)
            .bind(to_rfc3339(slot.created_at))
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

fn row_count(count: i64) -> Result<u64, StorageError> {
    u64::try_from(count).map_err(|_| StorageError::InvalidCount(count))
}

/// `SQLite`-backed slot repository.
pub struct SqliteSlotRepository {
    pool: SqlitePool,
}

impl SqliteSlotRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SlotRepository for SqliteSlotRepository {
    fn count(&self) -> impl Future<Output = Result<u64, ParkHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let count: i64 = sqlx::query_scalar(COUNT)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row_count(count)?)
        }
    }

    fn delete_all(&self) -> impl Future<Output = Result<(), ParkHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_ALL)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    /// Inserts the whole batch in one transaction: either every slot is
    /// written or none is.
    fn save_all(&self, slots: Vec<Slot>) -> impl Future<Output = Result<(), ParkHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            if let Err(err) = insert_batch(&mut tx, &slots).await {
                tx.rollback().await.map_err(StorageError::from)?;
                return Err(StorageError::from(err).into());
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Slot>, ParkHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn find_by_city(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Vec<Slot>, ParkHubError>> + Send {
        let pool = self.pool.clone();
        let city = city.to_owned();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY)
                .bind(city)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn get_by_id(
        &self,
        id: SlotId,
    ) -> impl Future<Output = Result<Option<Slot>, ParkHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
