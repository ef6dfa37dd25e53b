use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db::repository;
use crate::error::AppError;
use crate::models::{AttendanceStatus, ClassSession, ManualAdjustmentRequest, Student};
use crate::services::resolver;
use crate::services::time::LocalScan;

/// Device id written to the audit log for adjustments made from the web UI.
pub const MANUAL_DEVICE_ID: &str = "WEB_MANUAL";

/// How a scan ended. Only `Recorded` touches the datastore; the rest are
/// ordinary operating states (idle room, new badge, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Recorded {
        status: AttendanceStatus,
        student_number: String,
        class_code: String,
    },
    UnassignedDevice,
    NoActiveSession,
    UnregisteredBadge,
}

impl ScanOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, ScanOutcome::Recorded { .. })
    }

    pub fn message(&self) -> String {
        match self {
            ScanOutcome::Recorded { status: AttendanceStatus::Guest, class_code, .. } => {
                format!("Recorded as guest in {}", class_code)
            }
            ScanOutcome::Recorded { class_code, .. } => format!("Attendance recorded for {}", class_code),
            ScanOutcome::UnassignedDevice => "Device is not assigned to a room".to_string(),
            ScanOutcome::NoActiveSession => "No class is scheduled in this room right now".to_string(),
            ScanOutcome::UnregisteredBadge => "Badge is not registered".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManualAdjustment {
    pub old_val: i64,
    pub new_val: i64,
}

pub struct AttendanceService {
    db: SqlitePool,
}

impl AttendanceService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Full scan workflow: device -> room -> active session -> student -> record.
    pub async fn record_scan(
        &self,
        badge_uid: &str,
        device_id: &str,
        time_scan: i64,
    ) -> Result<ScanOutcome, AppError> {
        let Some(room) = resolver::resolve_room(&self.db, device_id).await? else {
            warn!("scan from unassigned device {}", device_id);
            return Ok(ScanOutcome::UnassignedDevice);
        };

        let scan = LocalScan::from_epoch(time_scan);
        let Some(session) = resolver::find_active_session(&self.db, &room, scan.time_of_day()).await?
        else {
            info!("no session in room {} at {}", room, scan.time_of_day_str());
            return Ok(ScanOutcome::NoActiveSession);
        };

        let Some(student) = resolver::resolve_student(&self.db, badge_uid).await? else {
            info!("unregistered badge {} on device {}", badge_uid, device_id);
            return Ok(ScanOutcome::UnregisteredBadge);
        };

        let status = self.record(&student, &session, device_id, &scan).await?;

        Ok(ScanOutcome::Recorded {
            status,
            student_number: student.student_number,
            class_code: session.class_code,
        })
    }

    /// Counts the scan against the student's enrollment, then appends the audit
    /// entry. The two writes are independent; the log always comes second.
    pub async fn record(
        &self,
        student: &Student,
        session: &ClassSession,
        device_id: &str,
        scan: &LocalScan,
    ) -> Result<AttendanceStatus, AppError> {
        let enrollment =
            repository::find_enrollment(&self.db, &student.student_number, &session.class_code).await?;

        let status = match enrollment {
            Some(enrollment) => {
                match repository::adjust_attendance_count(&self.db, enrollment.id, 1).await? {
                    Some(count) => {
                        info!(
                            "present: {} ({}) in {}, count now {}",
                            student.full_name, student.student_number, session.class_code, count
                        );
                        AttendanceStatus::Present
                    }
                    None => {
                        warn!(
                            "enrollment {} disappeared before it could be counted",
                            enrollment.id
                        );
                        AttendanceStatus::Guest
                    }
                }
            }
            None => {
                info!(
                    "guest: {} is not enrolled in {}",
                    student.student_number, session.class_code
                );
                AttendanceStatus::Guest
            }
        };

        repository::insert_attendance_log(
            &self.db,
            &student.student_number,
            device_id,
            &scan.to_rfc3339(),
            &status.to_string(),
        )
        .await?;

        Ok(status)
    }

    /// Instructor correction of an attendance count. Never creates an
    /// enrollment.
    pub async fn adjust_manually(
        &self,
        instructor: &str,
        req: &ManualAdjustmentRequest,
        now: &LocalScan,
    ) -> Result<ManualAdjustment, AppError> {
        let owned = repository::find_session(&self.db, &req.class_code)
            .await?
            .is_some_and(|s| s.is_owned_by(instructor));
        if !owned {
            warn!("{} tried to adjust attendance in {}", instructor, req.class_code);
            return Err(AppError::Forbidden);
        }

        let enrollment = repository::find_enrollment(&self.db, &req.student_number, &req.class_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{} is not enrolled in {}",
                    req.student_number, req.class_code
                ))
            })?;

        let delta = req.action.delta();
        let new_val = repository::adjust_attendance_count(&self.db, enrollment.id, delta)
            .await?
            .ok_or_else(|| AppError::BadRequest("Attendance count cannot go below zero".to_string()))?;
        let old_val = new_val - delta;

        let status = AttendanceStatus::ManualUpdate { from: old_val, to: new_val };
        repository::insert_attendance_log(
            &self.db,
            &req.student_number,
            MANUAL_DEVICE_ID,
            &now.to_rfc3339(),
            &status.to_string(),
        )
        .await?;

        info!(
            "{} adjusted {} in {}: {} -> {}",
            instructor, req.student_number, req.class_code, old_val, new_val
        );

        Ok(ManualAdjustment { old_val, new_val })
    }
}
