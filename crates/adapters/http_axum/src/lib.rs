//! # spatialhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **spatial data JSON API** (`/spatial-data/`, `/spatial-data/{id}/`),
//!   also mounted under `/api` for clients that expect that prefix
//! - Parse request bodies, accepting coordinates either flat (`lng`/`lat`)
//!   or nested under `location`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `spatialhub-app` (for port traits and services) and `spatialhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
