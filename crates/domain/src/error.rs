//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SpatialError`] via `From`, so use-cases only ever return one type.

use std::fmt;

use crate::location::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::record::NAME_MAX_LEN;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum SpatialError {
    /// Input failed a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coordinate axis, used to name the offending value in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Inclusive valid range for this axis.
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Latitude => LATITUDE_RANGE,
            Self::Longitude => LONGITUDE_RANGE,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => f.write_str("Latitude"),
            Self::Longitude => f.write_str("Longitude"),
        }
    }
}

/// Domain validation failures. Every variant names the field or value at fault.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{field}' must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Name must not be empty")]
    EmptyName,

    #[error("Name must be at most {max} characters (got {0})", max = NAME_MAX_LEN)]
    NameTooLong(usize),

    #[error("Invalid coordinate format: '{0}' must be a number")]
    NotNumeric(&'static str),

    #[error("{axis} {value} is out of range (must be {} to {})", .axis.range().0, .axis.range().1)]
    OutOfRange { axis: Axis, value: f64 },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
