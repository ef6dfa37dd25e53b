pub mod auth;
pub mod device;
pub mod instructor;

use axum::{
    Router,
    extract::State,
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeFile};

use crate::error::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_DISPOSITION, CONTENT_TYPE]);
    let index = ServeFile::new(&state.config.index_file);

    Router::new()
        .route("/health", get(health))
        .route("/api/attendance", post(device::receive_scan))
        .route("/api/students/{device_id}", get(device::students_for_device))
        .route("/token", post(auth::login))
        .route("/my-classes", get(instructor::my_classes))
        .route("/stats", get(instructor::stats))
        .route("/export", get(instructor::export))
        .route("/update-attendance", post(instructor::update_attendance))
        .route_service("/", index)
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}
