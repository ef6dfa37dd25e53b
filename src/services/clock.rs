use chrono::{DateTime, Utc};

use crate::services::time::LocalScan;

/// Source of "now" for roster lookups and manual audit entries.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;

    fn now_local(&self) -> LocalScan {
        LocalScan::from_utc(self.now_utc())
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Used by tests.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_epoch(secs: i64) -> Self {
        Self(DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
