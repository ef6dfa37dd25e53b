use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One scheduled class occupying a room for a daily time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ClassSession {
    pub class_code: String,
    pub class_name: String,
    pub room: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub instructor_username: String,
}

impl ClassSession {
    /// Both ends of the window are inclusive.
    pub fn is_active_at(&self, time: NaiveTime) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        self.instructor_username == username
    }
}
