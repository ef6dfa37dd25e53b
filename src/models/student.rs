use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub student_number: String,
    pub badge_uid: Option<String>,
    pub full_name: String,
}

/// What a scanner caches about each student of the class in its room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RosterEntry {
    pub uid: String,
    pub mssv: String,
    pub name: String,
}
