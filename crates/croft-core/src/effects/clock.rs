//! Wall-clock effect
//!
//! Token issuance/expiry and claim timestamps read time exclusively
//! through this trait, so tests can pin the clock.

use crate::timestamp::Timestamp;
use async_trait::async_trait;

/// Provider of the current wall-clock time
#[async_trait]
pub trait ClockEffects: Send + Sync {
    /// Current time
    async fn now(&self) -> Timestamp;
}
