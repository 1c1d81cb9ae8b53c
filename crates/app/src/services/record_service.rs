//! Record service: use-cases for managing spatial records.

use spatialhub_domain::error::{NotFoundError, SpatialError};
use spatialhub_domain::id::RecordId;
use spatialhub_domain::record::{NewRecord, RecordChanges, RecordFilter, SpatialRecord};

use crate::ports::RecordRepository;

const ENTITY: &str = "Spatial data";

fn not_found(id: RecordId) -> SpatialError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for spatial record CRUD operations.
pub struct RecordService<R> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new record after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, record), fields(record_name = %record.name))]
    pub async fn create_record(&self, record: NewRecord) -> Result<SpatialRecord, SpatialError> {
        record.validate()?;
        let created = self.repo.create(record).await?;
        tracing::info!(id = %created.id, "spatial record created");
        Ok(created)
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_record(&self, id: RecordId) -> Result<SpatialRecord, SpatialError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List records matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_records(
        &self,
        filter: RecordFilter,
    ) -> Result<Vec<SpatialRecord>, SpatialError> {
        self.repo.get_all(filter).await
    }

    /// Apply a partial update and return the post-update snapshot.
    ///
    /// An empty change set still checks that the record exists.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::Validation`] if a provided field is invalid,
    /// [`SpatialError::NotFound`] when no record with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_record(
        &self,
        id: RecordId,
        changes: RecordChanges,
    ) -> Result<SpatialRecord, SpatialError> {
        if changes.is_empty() {
            return self.get_record(id).await;
        }
        changes.validate()?;
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Permanently delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_record(&self, id: RecordId) -> Result<(), SpatialError> {
        if self.repo.delete(id).await? {
            tracing::info!(%id, "spatial record deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
