use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `class_statistics` view. `absence_count` is maintained by
/// the datastore.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatisticsRow {
    pub class_code: String,
    pub class_name: String,
    pub student_number: String,
    pub full_name: String,
    pub attendance_count: i64,
    pub absence_count: i64,
}

impl StatisticsRow {
    pub const CSV_HEADER: [&'static str; 6] = [
        "class_code",
        "class_name",
        "student_number",
        "full_name",
        "attendance_count",
        "absence_count",
    ];
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub detail_list: Vec<StatisticsRow>,
}
