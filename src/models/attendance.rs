use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student's membership in one class, with the running attendance tally.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: i64,
    pub student_number: String,
    pub class_code: String,
    pub attendance_count: i64,
    pub absence_count: i64,
}

/// Append-only audit row. `logged_at` is RFC 3339 in local (UTC+7) time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendanceLogEntry {
    pub id: i64,
    pub student_number: String,
    pub device_id: String,
    pub logged_at: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Guest,
    ManualUpdate { from: i64, to: i64 },
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => f.write_str("Present"),
            AttendanceStatus::Guest => f.write_str("Guest"),
            AttendanceStatus::ManualUpdate { from, to } => {
                write!(f, "Manual Update: {} -> {}", from, to)
            }
        }
    }
}

/// Body posted by a scanner for every badge read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub uid: String,
    pub device_id: String,
    pub time_scan: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustAction {
    Increase,
    Decrease,
}

impl AdjustAction {
    pub fn delta(self) -> i64 {
        match self {
            AdjustAction::Increase => 1,
            AdjustAction::Decrease => -1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualAdjustmentRequest {
    #[serde(rename = "mssv")]
    pub student_number: String,
    #[serde(rename = "ma_lop")]
    pub class_code: String,
    pub action: AdjustAction,
}
