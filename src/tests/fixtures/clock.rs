use crate::shared::core::primitives::Clock;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

pub const START_SECONDS: i64 = 1_700_000_000;

/// Deterministic clock that advances one second on every read.
pub struct SteppingClock {
    seconds: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            seconds: AtomicI64::new(START_SECONDS),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let seconds = self.seconds.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(seconds, 0).unwrap()
    }
}
