//! Request body parsing for spatial data endpoints.
//!
//! Bodies are read as raw JSON objects and converted field by field so
//! that every failure names the field at fault. Coordinates are accepted in
//! two shapes, read the same way on create and update:
//!
//! ```json
//! {"name": "Monas", "lng": 106.8271, "lat": -6.1754}
//! {"name": "Monas", "location": {"lng": 106.8271, "lat": -6.1754}}
//! ```
//!
//! When `location` is an object the coordinates come from it, otherwise
//! from the top level.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use spatialhub_domain::error::{SpatialError, ValidationError};
use spatialhub_domain::location::Location;
use spatialhub_domain::record::{NewRecord, RecordChanges};

use crate::error::ApiError;

/// A request body that parsed as a JSON object.
///
/// The `Content-Type` header is not inspected.
#[derive(Debug)]
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::Body)?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|err| {
            tracing::debug!(error = %err, "rejecting malformed JSON body");
            ApiError::InvalidJson
        })?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ApiError::NotAnObject),
        }
    }
}

/// Pick the object holding `lng`/`lat`: the nested `location` object if
/// there is one, the body itself otherwise.
fn coordinate_source(body: &Map<String, Value>) -> &Map<String, Value> {
    match body.get("location") {
        Some(Value::Object(nested)) => nested,
        _ => body,
    }
}

fn number(value: &Value, field: &'static str) -> Result<f64, ValidationError> {
    value.as_f64().ok_or(ValidationError::NotNumeric(field))
}

fn location_from(lng: &Value, lat: &Value) -> Result<Location, ValidationError> {
    let lng = number(lng, "lng")?;
    let lat = number(lat, "lat")?;
    Location::new(lng, lat)
}

/// Read a string field. `null` counts as absent.
fn optional_string(
    body: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::InvalidType {
            field,
            expected: "a string",
        }),
    }
}

/// Convert a create body into a validated [`NewRecord`].
///
/// # Errors
///
/// Returns [`SpatialError::Validation`] for a missing `name`, `lng` or `lat`,
/// a non-numeric coordinate, an out-of-range coordinate, or an invalid name.
pub fn parse_create(body: &Map<String, Value>) -> Result<NewRecord, SpatialError> {
    let name = optional_string(body, "name")?.ok_or(ValidationError::MissingField("name"))?;
    let description = optional_string(body, "description")?.unwrap_or_default();

    let source = coordinate_source(body);
    let lng = source
        .get("lng")
        .ok_or(ValidationError::MissingField("lng"))?;
    let lat = source
        .get("lat")
        .ok_or(ValidationError::MissingField("lat"))?;
    let location = location_from(lng, lat)?;

    NewRecord::builder()
        .name(name)
        .description(description)
        .location(location)
        .build()
}

/// Convert an update body into [`RecordChanges`].
///
/// Only fields present in the body are changed. Coordinates are applied
/// only as a pair; a lone `lat` or `lng` is ignored.
///
/// # Errors
///
/// Returns [`SpatialError::Validation`] when a present field has the wrong
/// type or the coordinate pair is non-numeric or out of range.
pub fn parse_update(body: &Map<String, Value>) -> Result<RecordChanges, SpatialError> {
    let name = optional_string(body, "name")?;
    let description = optional_string(body, "description")?;

    let source = coordinate_source(body);
    let location = match (source.get("lng"), source.get("lat")) {
        (Some(lng), Some(lat)) => Some(location_from(lng, lat)?),
        _ => None,
    };

    let changes = RecordChanges {
        name,
        description,
        location,
    };
    changes.validate()?;
    Ok(changes)
}
