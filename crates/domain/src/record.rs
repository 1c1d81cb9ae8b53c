//! Spatial record: a named point of interest with an optional description.

use serde::Serialize;

use crate::error::{SpatialError, ValidationError};
use crate::id::RecordId;
use crate::location::Location;
use crate::time::Timestamp;

/// Maximum number of characters in a record name.
pub const NAME_MAX_LEN: usize = 100;

/// A persisted spatial record.
///
/// `id` and `created_at` are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpatialRecord {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub location: Location,
    pub created_at: Timestamp,
}

/// Check a record name: non-blank and at most [`NAME_MAX_LEN`] characters.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] or [`ValidationError::NameTooLong`].
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong(len));
    }
    Ok(())
}

/// A record that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub name: String,
    pub description: String,
    pub location: Location,
}

impl NewRecord {
    /// Create a builder for constructing a [`NewRecord`].
    #[must_use]
    pub fn builder() -> NewRecordBuilder {
        NewRecordBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::Validation`] when the name is blank or too long.
    pub fn validate(&self) -> Result<(), SpatialError> {
        validate_name(&self.name)?;
        Ok(())
    }
}

/// Step-by-step builder for [`NewRecord`].
#[derive(Debug, Default)]
pub struct NewRecordBuilder {
    name: Option<String>,
    description: Option<String>,
    location: Option<Location>,
}

impl NewRecordBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Consume the builder, validate, and return a [`NewRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::Validation`] if `name` or `location` is
    /// missing, or if the name is invalid.
    pub fn build(self) -> Result<NewRecord, SpatialError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let location = self
            .location
            .ok_or(ValidationError::MissingField("location"))?;
        let record = NewRecord {
            name,
            description: self.description.unwrap_or_default(),
            location,
        };
        record.validate()?;
        Ok(record)
    }
}

/// A partial update. Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
}

impl RecordChanges {
    /// `true` when no field would be modified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.location.is_none()
    }

    /// Check domain invariants on the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::Validation`] when a provided name is invalid.
    pub fn validate(&self) -> Result<(), SpatialError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }

    /// Apply these changes to a record in place. `id` and `created_at` are untouched.
    pub fn apply_to(self, record: &mut SpatialRecord) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(location) = self.location {
            record.location = location;
        }
    }
}

/// Case folding used by search, applied the same way to stored text and
/// to search terms. Unicode-aware, so `"ÉGLISE"` folds to `"église"`.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Criteria for listing records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Case-folded substring matched against name and description.
    pub search: Option<String>,
}

impl RecordFilter {
    /// Build a filter from a raw search term; blank terms mean "no filter".
    #[must_use]
    pub fn search(term: Option<&str>) -> Self {
        let search = term
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(fold_case);
        Self { search }
    }

    /// Whether `record` satisfies this filter.
    #[must_use]
    pub fn matches(&self, record: &SpatialRecord) -> bool {
        let Some(term) = &self.search else {
            return true;
        };
        fold_case(&record.name).contains(term.as_str())
            || fold_case(&record.description).contains(term.as_str())
    }
}
