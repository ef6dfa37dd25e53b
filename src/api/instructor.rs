//! Instructor-facing endpoints. Every query is filtered on the token's
//! username, so another instructor's class looks empty or forbidden.

use axum::{
    Json,
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentInstructor;
use crate::db::repository;
use crate::error::AppError;
use crate::models::{ClassSummary, ManualAdjustmentRequest, StatisticsResponse};
use crate::services::{AttendanceService, export};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassQuery {
    #[serde(alias = "ma_lop")]
    pub class_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAttendanceResponse {
    pub msg: String,
    pub new_val: i64,
}

pub async fn my_classes(
    State(state): State<AppState>,
    CurrentInstructor(username): CurrentInstructor,
) -> Result<Json<Vec<ClassSummary>>, AppError> {
    let classes = repository::fetch_classes_for_instructor(&state.db, &username).await?;
    Ok(Json(classes))
}

pub async fn stats(
    State(state): State<AppState>,
    CurrentInstructor(username): CurrentInstructor,
    Query(params): Query<ClassQuery>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let detail_list = repository::fetch_statistics(&state.db, &username, &params.class_code).await?;
    Ok(Json(StatisticsResponse { detail_list }))
}

/// GET /export?class_code=...
///
/// Same rows as `/stats`, as a CSV attachment named `report_<class_code>.csv`.
pub async fn export(
    State(state): State<AppState>,
    CurrentInstructor(username): CurrentInstructor,
    Query(params): Query<ClassQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = repository::fetch_statistics(&state.db, &username, &params.class_code).await?;
    let body = export::statistics_csv(&rows);
    let filename = export::report_filename(&params.class_code);

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)),
        ],
        body,
    ))
}

pub async fn update_attendance(
    State(state): State<AppState>,
    CurrentInstructor(username): CurrentInstructor,
    Json(req): Json<ManualAdjustmentRequest>,
) -> Result<Json<UpdateAttendanceResponse>, AppError> {
    let service = AttendanceService::new(state.db.clone());
    let now = state.clock.now_local();
    let adjustment = service.adjust_manually(&username, &req, &now).await?;

    Ok(Json(UpdateAttendanceResponse {
        msg: "OK".to_string(),
        new_val: adjustment.new_val,
    }))
}
