//! Wall-clock timestamps
//!
//! A millisecond-precision unix timestamp wrapper. All expiry and ordering
//! logic in the core compares these values; only the clock effect handler
//! ever produces one from the system clock.

use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// Unix timestamp in milliseconds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Create from unix milliseconds
    pub fn from_unix_ms(ms: i64) -> Self {
        Self(ms)
    }

    /// The inner unix-millisecond value
    pub fn as_unix_ms(&self) -> i64 {
        self.0
    }

    /// This timestamp shifted forward by `ms` milliseconds
    pub fn plus_ms(&self, ms: i64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * 1_000_000) {
            Ok(dt) => write!(f, "{dt}"),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}
