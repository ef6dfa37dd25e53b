#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::Utc;
use rollcall::{
    api::router,
    auth::generate_jwt,
    config::AppConfig,
    db,
    services::FixedClock,
    state::AppState,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// 2024-03-04 09:15:00 local (UTC+7).
pub const NOW_0915: i64 = 1_709_518_500;

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = db::connect_in_memory()
            .await
            .expect("Failed to create database");
        seed(&db).await;

        let config = AppConfig::from_lookup(|key| match key {
            "JWT_SECRET" => Some("test_secret".to_string()),
            "INDEX_FILE" => Some(format!("{}/static/index.html", env!("CARGO_MANIFEST_DIR"))),
            _ => None,
        })
        .expect("Failed to build config");
        let config = Arc::new(config);

        let state = AppState {
            db: db.clone(),
            config: config.clone(),
            clock: Arc::new(FixedClock::at_epoch(NOW_0915)),
        };

        Self {
            router: router(state),
            db,
            config,
        }
    }

    pub fn token_for(&self, username: &str) -> String {
        generate_jwt(&self.config.auth, username, Utc::now()).expect("Failed to sign token")
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.expect("request failed")
    }

    pub async fn get_authed(&self, uri: &str, username: &str) -> Response<Body> {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .header("Authorization", format!("Bearer {}", self.token_for(username)))
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    pub async fn post_json(&self, uri: &str, body: Value, bearer: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(username) = bearer {
            builder = builder.header("Authorization", format!("Bearer {}", self.token_for(username)));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    pub async fn attendance_count(&self, student_number: &str, class_code: &str) -> i64 {
        sqlx::query_scalar(
            "SELECT attendance_count FROM enrollments WHERE student_number = ? AND class_code = ?",
        )
        .bind(student_number)
        .bind(class_code)
        .fetch_one(&self.db)
        .await
        .expect("Failed to read attendance count")
    }

    pub async fn log_statuses(&self) -> Vec<String> {
        sqlx::query_scalar("SELECT status FROM attendance_logs ORDER BY id")
            .fetch_all(&self.db)
            .await
            .expect("Failed to read logs")
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Two instructors, one room with a morning and an afternoon class, a
/// second room, and a handful of students.
async fn seed(db: &SqlitePool) {
    let statements = [
        "INSERT INTO instructors (username, password_hash) VALUES ('gv_an', 'unset'), ('gv_binh', 'unset')",
        "INSERT INTO devices (device_id, room) VALUES ('ESP-A1', 'A1'), ('ESP-B2', 'B2'), ('ESP-NEW', NULL)",
        "INSERT INTO class_sessions (class_code, class_name, room, start_time, end_time, instructor_username) VALUES
            ('CS101', 'Intro to Programming', 'A1', '09:00:00', '10:30:00', 'gv_an'),
            ('CS102', 'Data Structures', 'A1', '13:00:00', '14:30:00', 'gv_an'),
            ('MA201', 'Linear Algebra', 'B2', '09:00:00', '10:30:00', 'gv_binh')",
        "INSERT INTO students (student_number, badge_uid, full_name) VALUES
            ('SV001', 'UID1', 'Nguyen Van A'),
            ('SV002', 'UID2', 'Tran Thi B'),
            ('SV003', NULL, 'Le Van C')",
        "INSERT INTO enrollments (student_number, class_code, attendance_count) VALUES
            ('SV001', 'CS101', 3),
            ('SV003', 'CS101', 1),
            ('SV002', 'MA201', 5)",
    ];

    for sql in statements {
        sqlx::query(sql).execute(db).await.expect("Failed to seed");
    }
}
