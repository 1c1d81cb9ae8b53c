//! JSON REST handlers for spatial data.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use spatialhub_app::ports::RecordRepository;
use spatialhub_domain::error::{NotFoundError, SpatialError};
use spatialhub_domain::id::RecordId;
use spatialhub_domain::record::{RecordFilter, SpatialRecord};

use crate::api::payload::{JsonObject, parse_create, parse_update};
use crate::error::ApiError;
use crate::state::AppState;

/// Query string accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Case-insensitive text matched against name and description.
    pub search: Option<String>,
}

/// `{"data": [...]}`
#[derive(Serialize)]
pub struct ListBody {
    pub data: Vec<SpatialRecord>,
}

/// `{"success": true, "data": {...}}`
#[derive(Serialize)]
pub struct RecordBody {
    pub success: bool,
    pub data: SpatialRecord,
}

/// `{"success": true, "message": "..."}`
#[derive(Serialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ListBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create, get and update endpoints.
pub enum RecordResponse {
    Ok(Json<RecordBody>),
}

impl RecordResponse {
    fn ok(record: SpatialRecord) -> Self {
        Self::Ok(Json(RecordBody {
            success: true,
            data: record,
        }))
    }
}

impl IntoResponse for RecordResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// A path segment that is not an integer can never name a record.
fn parse_id(raw: &str) -> Result<RecordId, ApiError> {
    RecordId::from_str(raw).map_err(|_| {
        ApiError::from(SpatialError::from(NotFoundError {
            entity: "Spatial data",
            id: raw.to_string(),
        }))
    })
}

/// `GET /spatial-data/`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
{
    let Query(params) = params?;
    let filter = RecordFilter::search(params.search.as_deref());
    let records = state.record_service.list_records(filter).await?;
    Ok(ListResponse::Ok(Json(ListBody { data: records })))
}

/// `POST /spatial-data/` and `POST /spatial-data/create/`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    JsonObject(body): JsonObject,
) -> Result<RecordResponse, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
{
    let record = parse_create(&body)?;
    let created = state.record_service.create_record(record).await?;
    Ok(RecordResponse::ok(created))
}

/// `GET /spatial-data/{id}/`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<RecordResponse, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let record = state.record_service.get_record(id).await?;
    Ok(RecordResponse::ok(record))
}

/// `PUT /spatial-data/{id}/`: partial update.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<RecordResponse, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let changes = parse_update(&body)?;
    let updated = state.record_service.update_record(id, changes).await?;
    Ok(RecordResponse::ok(updated))
}

/// `DELETE /spatial-data/{id}/`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.record_service.delete_record(id).await?;
    Ok(DeleteResponse::Deleted(Json(MessageBody {
        success: true,
        message: format!("Spatial data {id} deleted successfully"),
    })))
}
