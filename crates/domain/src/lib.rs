//! # spatialhub-domain
//!
//! Pure domain model for the spatialhub point-of-interest service.
//!
//! ## Responsibilities
//! - Foundational types: record identifiers, error conventions, timestamps
//! - Define **Locations** (validated longitude/latitude pairs)
//! - Define **Spatial records**, their creation drafts and partial updates
//! - Contain all invariant enforcement (coordinate ranges, name rules)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod location;
pub mod record;
pub mod time;
