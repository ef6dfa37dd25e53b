//! Endpoints called by the scanners. Expected absences (idle room, unknown
//! badge, ...) are answered with 200 and a message, never an error page.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::error;

use crate::error::AppError;
use crate::models::{RosterEntry, ScanRequest};
use crate::services::{AttendanceService, roster};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub status: &'static str,
    pub message: String,
}

pub async fn receive_scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    if req.uid.is_empty() || req.device_id.is_empty() {
        return Err(AppError::BadRequest("missing uid or device_id".to_string()));
    }

    let service = AttendanceService::new(state.db.clone());
    let outcome = service
        .record_scan(&req.uid, &req.device_id, req.time_scan)
        .await?;

    Ok(Json(ScanResponse {
        status: if outcome.is_recorded() { "success" } else { "error" },
        message: outcome.message(),
    }))
}

/// Datastore faults are logged and reported as an empty roster; the device
/// only ever renders the list.
pub async fn students_for_device(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Json<Vec<RosterEntry>> {
    let now = state.clock.now_local();
    match roster::roster_for_device(&state.db, &device_id, &now).await {
        Ok(entries) => Json(entries),
        Err(e) => {
            error!("roster lookup for {} failed: {}", device_id, e);
            Json(Vec::new())
        }
    }
}
