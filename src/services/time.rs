//! Scan-time resolution. Every wall-clock comparison in the service happens
//! in a fixed UTC+7 offset, whatever the host time zone is.

use chrono::{DateTime, FixedOffset, NaiveTime, Timelike, Utc};

pub const UTC_OFFSET_SECS: i32 = 7 * 3600;

pub const LOCAL_OFFSET: FixedOffset = match FixedOffset::east_opt(UTC_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("UTC_OFFSET_SECS must be within one day"),
};

/// A scan instant expressed in local civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalScan {
    pub at: DateTime<FixedOffset>,
}

impl LocalScan {
    /// Epoch seconds outside chrono's range saturate to (just inside) its bounds.
    pub fn from_epoch(secs: i64) -> Self {
        let lo = DateTime::<Utc>::MIN_UTC.timestamp() + 86_400;
        let hi = DateTime::<Utc>::MAX_UTC.timestamp() - 86_400;
        let utc = DateTime::<Utc>::from_timestamp(secs.clamp(lo, hi), 0).unwrap_or_default();
        Self::from_utc(utc)
    }

    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self {
            at: utc.with_timezone(&LOCAL_OFFSET),
        }
    }

    /// Time of day truncated to whole seconds, used for window matching.
    pub fn time_of_day(&self) -> NaiveTime {
        let t = self.at.time();
        t.with_nanosecond(0).unwrap_or(t)
    }

    /// `HH:MM:SS`, the format schedule windows are stored in.
    pub fn time_of_day_str(&self) -> String {
        self.time_of_day().format("%H:%M:%S").to_string()
    }

    pub fn to_rfc3339(&self) -> String {
        self.at.to_rfc3339()
    }
}
