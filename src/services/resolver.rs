use chrono::NaiveTime;
use sqlx::SqlitePool;
use tracing::warn;

use crate::db::repository;
use crate::models::{ClassSession, Student};

/// Room the device is installed in. `None` covers both unknown devices and
/// devices without an assignment.
pub async fn resolve_room(db: &SqlitePool, device_id: &str) -> Result<Option<String>, sqlx::Error> {
    let device = repository::find_device(db, device_id).await?;
    Ok(device.and_then(|d| d.assigned_room().map(str::to_string)))
}

pub async fn resolve_student(db: &SqlitePool, badge_uid: &str) -> Result<Option<Student>, sqlx::Error> {
    repository::find_student_by_badge(db, badge_uid).await
}

/// The session scheduled in `room` at `time`, if any.
pub async fn find_active_session(
    db: &SqlitePool,
    room: &str,
    time: NaiveTime,
) -> Result<Option<ClassSession>, sqlx::Error> {
    let sessions = repository::fetch_sessions_in_room(db, room).await?;
    Ok(pick_active(sessions, room, time))
}

/// Picks the session whose window contains `time`. Overlapping windows are
/// bad schedule data; the lowest class code wins and the clash is logged.
pub fn pick_active(sessions: Vec<ClassSession>, room: &str, time: NaiveTime) -> Option<ClassSession> {
    let mut active: Vec<ClassSession> = sessions
        .into_iter()
        .filter(|s| s.is_active_at(time))
        .collect();
    active.sort_by(|a, b| a.class_code.cmp(&b.class_code));

    if active.len() > 1 {
        let codes: Vec<&str> = active.iter().map(|s| s.class_code.as_str()).collect();
        warn!(
            "overlapping sessions in room {} at {}: {:?}, using {}",
            room, time, codes, codes[0]
        );
    }

    active.into_iter().next()
}
