//! # spatialhub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RecordRepository`: CRUD for spatial records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RecordService`: create, list, get, update, delete
//! - Turn "absent" answers from the store into typed not-found errors
//!
//! ## Dependency rule
//! Depends on `spatialhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
