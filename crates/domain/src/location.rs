//! Location: a validated WGS84 point.
//!
//! A [`Location`] can only be obtained through [`Location::new`], so every
//! value in the system is within range. Storage adapters that rebuild a
//! location from trusted rows go through the same constructor.

use serde::Serialize;

use crate::error::{Axis, ValidationError};

/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A geographic point. Serialized as `{"lat": …, "lng": …}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    lat: f64,
    lng: f64,
}

impl Location {
    /// Build a location from longitude and latitude, in that order.
    ///
    /// Latitude is checked first, so when both values are out of range
    /// the latitude is reported.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] naming the offending axis
    /// and value when either coordinate is outside its range or not finite.
    pub fn new(lng: f64, lat: f64) -> Result<Self, ValidationError> {
        check(Axis::Latitude, lat)?;
        check(Axis::Longitude, lng)?;
        Ok(Self { lat, lng })
    }

    /// Longitude in degrees, within [-180, 180].
    #[must_use]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Latitude in degrees, within [-90, 90].
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }
}

fn check(axis: Axis, value: f64) -> Result<(), ValidationError> {
    let (min, max) = axis.range();
    // NaN fails the range test as well.
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { axis, value })
    }
}
