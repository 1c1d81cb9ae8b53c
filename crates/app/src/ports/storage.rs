//! Storage port: repository trait for spatial record persistence.

use std::future::Future;

use spatialhub_domain::error::SpatialError;
use spatialhub_domain::id::RecordId;
use spatialhub_domain::record::{NewRecord, RecordChanges, RecordFilter, SpatialRecord};

/// Repository for persisting and querying [`SpatialRecord`]s.
///
/// Implementations assign identifiers and creation timestamps. An identifier
/// must never be handed out twice, even after the record is deleted.
pub trait RecordRepository {
    /// Store a new record, assigning a fresh id and the current time.
    fn create(
        &self,
        record: NewRecord,
    ) -> impl Future<Output = Result<SpatialRecord, SpatialError>> + Send;

    /// Get a record by its identifier.
    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<SpatialRecord>, SpatialError>> + Send;

    /// Get all records matching `filter`, ordered by id.
    fn get_all(
        &self,
        filter: RecordFilter,
    ) -> impl Future<Output = Result<Vec<SpatialRecord>, SpatialError>> + Send;

    /// Apply `changes` to the record and return the updated snapshot,
    /// or `None` when no record has this id.
    fn update(
        &self,
        id: RecordId,
        changes: RecordChanges,
    ) -> impl Future<Output = Result<Option<SpatialRecord>, SpatialError>> + Send;

    /// Delete a record. Returns `false` when no record has this id.
    fn delete(&self, id: RecordId) -> impl Future<Output = Result<bool, SpatialError>> + Send;
}
