//! System clock handler

use async_trait::async_trait;
use croft_core::effects::ClockEffects;
use croft_core::Timestamp;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Wall-clock handler backed by the operating system clock
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock handler
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClockEffects for SystemClock {
    async fn now(&self) -> Timestamp {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        Timestamp::from_unix_ms(since_epoch.as_millis() as i64)
    }
}
