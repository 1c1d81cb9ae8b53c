//! Creation timestamps.

use chrono::{DateTime, SubsecRound, Utc};

/// UTC timestamp, serialized as RFC 3339.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time truncated to microseconds, the precision the store keeps.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}
