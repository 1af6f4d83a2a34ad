use chrono::{DateTime, Utc};

pub type PostId = i64;
pub type UserId = i64;

/// Source of wall-clock time for the command path.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
