//! JSON REST API handler modules.

pub mod payload;
#[allow(clippy::missing_errors_doc)]
pub mod spatial_data;

use axum::Router;
use axum::routing::{get, post};

use spatialhub_app::ports::RecordRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the spatial data sub-router.
///
/// Every route answers unsupported methods with a JSON 405.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: RecordRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/spatial-data/",
            get(spatial_data::list::<R>)
                .post(spatial_data::create::<R>)
                .fallback(method_not_allowed),
        )
        // Creation endpoint kept for older clients.
        .route(
            "/spatial-data/create/",
            post(spatial_data::create::<R>).fallback(method_not_allowed),
        )
        .route(
            "/spatial-data/{id}/",
            get(spatial_data::get::<R>)
                .put(spatial_data::update::<R>)
                .delete(spatial_data::delete::<R>)
                .fallback(method_not_allowed),
        )
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
