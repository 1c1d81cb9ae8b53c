//! Shared application state for axum handlers.

use std::sync::Arc;

use spatialhub_app::ports::RecordRepository;
use spatialhub_app::services::record_service::RecordService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Spatial record CRUD service.
    pub record_service: Arc<RecordService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            record_service: Arc::clone(&self.record_service),
        }
    }
}

impl<R> AppState<R>
where
    R: RecordRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(record_service: RecordService<R>) -> Self {
        Self::from_arc(Arc::new(record_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(record_service: Arc<RecordService<R>>) -> Self {
        Self { record_service }
    }
}
