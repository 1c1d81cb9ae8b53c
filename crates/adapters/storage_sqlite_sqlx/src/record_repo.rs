//! `SQLite` implementation of [`RecordRepository`].

use std::future::Future;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use spatialhub_app::ports::RecordRepository;
use spatialhub_domain::error::SpatialError;
use spatialhub_domain::id::RecordId;
use spatialhub_domain::location::Location;
use spatialhub_domain::record::{
    NewRecord, RecordChanges, RecordFilter, SpatialRecord, fold_case,
};
use spatialhub_domain::time::{Timestamp, now};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`SpatialRecord`].
struct Wrapper(SpatialRecord);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<SpatialRecord> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: String = row.try_get("description")?;
        let longitude: f64 = row.try_get("longitude")?;
        let latitude: f64 = row.try_get("latitude")?;
        let created_at: String = row.try_get("created_at")?;

        let location = Location::new(longitude, latitude)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .with_timezone(&Utc);

        Ok(Self(SpatialRecord {
            id: RecordId::new(id),
            name,
            description,
            location,
            created_at,
        }))
    }
}

fn format_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

const INSERT: &str = "INSERT INTO spatial_data \
        (name, name_folded, description, description_folded, longitude, latitude, created_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
     RETURNING id, name, description, longitude, latitude, created_at";
const SELECT_BY_ID: &str = "SELECT id, name, description, longitude, latitude, created_at \
     FROM spatial_data WHERE id = ?";
const SELECT_FILTERED: &str = "SELECT id, name, description, longitude, latitude, created_at \
     FROM spatial_data \
     WHERE ?1 IS NULL \
        OR instr(name_folded, ?1) > 0 \
        OR instr(description_folded, ?1) > 0 \
     ORDER BY id";
const UPDATE: &str = "UPDATE spatial_data SET \
        name = COALESCE(?1, name), \
        name_folded = COALESCE(?2, name_folded), \
        description = COALESCE(?3, description), \
        description_folded = COALESCE(?4, description_folded), \
        longitude = COALESCE(?5, longitude), \
        latitude = COALESCE(?6, latitude) \
     WHERE id = ?7 \
     RETURNING id, name, description, longitude, latitude, created_at";
const DELETE_BY_ID: &str = "DELETE FROM spatial_data WHERE id = ?";

/// `SQLite`-backed spatial record repository.
///
/// Every write is a single statement, so a record is never observed half-updated.
pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecordRepository for SqliteRecordRepository {
    fn create(
        &self,
        record: NewRecord,
    ) -> impl Future<Output = Result<SpatialRecord, SpatialError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(record.name.as_str())
                .bind(fold_case(&record.name))
                .bind(record.description.as_str())
                .bind(fold_case(&record.description))
                .bind(record.location.lng())
                .bind(record.location.lat())
                .bind(format_timestamp(now()))
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<SpatialRecord>, SpatialError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(
        &self,
        filter: RecordFilter,
    ) -> impl Future<Output = Result<Vec<SpatialRecord>, SpatialError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_FILTERED)
                .bind(filter.search)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: RecordId,
        changes: RecordChanges,
    ) -> impl Future<Output = Result<Option<SpatialRecord>, SpatialError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(changes.name.as_deref())
                .bind(changes.name.as_deref().map(fold_case))
                .bind(changes.description.as_deref())
                .bind(changes.description.as_deref().map(fold_case))
                .bind(changes.location.map(|loc| loc.lng()))
                .bind(changes.location.map(|loc| loc.lat()))
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<bool, SpatialError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
