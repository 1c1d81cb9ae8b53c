//! In-memory [`RecordRepository`] for tests of this crate and of adapters.
//!
//! Enabled for this crate's own tests and, for dependents, through the
//! `testing` feature.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use spatialhub_domain::error::SpatialError;
use spatialhub_domain::id::RecordId;
use spatialhub_domain::record::{NewRecord, RecordChanges, RecordFilter, SpatialRecord};
use spatialhub_domain::time::now;

use crate::ports::RecordRepository;

/// Records kept in id order, with a counter that only ever grows.
#[derive(Debug, Default)]
pub struct InMemoryRecordRepo {
    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    records: BTreeMap<RecordId, SpatialRecord>,
}

impl InMemoryRecordRepo {
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordRepository for InMemoryRecordRepo {
    fn create(
        &self,
        record: NewRecord,
    ) -> impl Future<Output = Result<SpatialRecord, SpatialError>> + Send {
        let mut store = self.store();
        store.last_id += 1;
        let created = SpatialRecord {
            id: RecordId::new(store.last_id),
            name: record.name,
            description: record.description,
            location: record.location,
            created_at: now(),
        };
        store.records.insert(created.id, created.clone());
        async { Ok(created) }
    }

    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<SpatialRecord>, SpatialError>> + Send {
        let result = self.store().records.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(
        &self,
        filter: RecordFilter,
    ) -> impl Future<Output = Result<Vec<SpatialRecord>, SpatialError>> + Send {
        let result: Vec<SpatialRecord> = self
            .store()
            .records
            .values()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: RecordId,
        changes: RecordChanges,
    ) -> impl Future<Output = Result<Option<SpatialRecord>, SpatialError>> + Send {
        let result = self.store().records.get_mut(&id).map(|record| {
            changes.apply_to(record);
            record.clone()
        });
        async { Ok(result) }
    }

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<bool, SpatialError>> + Send {
        let removed = self.store().records.remove(&id).is_some();
        async move { Ok(removed) }
    }
}
