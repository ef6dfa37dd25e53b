use sqlx::SqlitePool;
use tracing::debug;

use crate::db::repository;
use crate::models::RosterEntry;
use crate::services::resolver;
use crate::services::time::LocalScan;

/// Students of whatever class is running in the device's room at `now`.
/// An idle room, or an unknown device, gives an empty list.
pub async fn roster_for_device(
    db: &SqlitePool,
    device_id: &str,
    now: &LocalScan,
) -> Result<Vec<RosterEntry>, sqlx::Error> {
    let Some(room) = resolver::resolve_room(db, device_id).await? else {
        debug!("roster requested by unassigned device {}", device_id);
        return Ok(Vec::new());
    };

    let Some(session) = resolver::find_active_session(db, &room, now.time_of_day()).await? else {
        debug!("roster requested for idle room {} at {}", room, now.time_of_day_str());
        return Ok(Vec::new());
    };

    repository::fetch_roster(db, &session.class_code).await
}
