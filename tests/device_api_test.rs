mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{NOW_0915, TestApp, body_json};
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    assert_eq!(app.send(req).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_enrolled_scan_is_recorded() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/attendance",
            json!({ "uid": "UID1", "device_id": "ESP-A1", "time_scan": NOW_0915 }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(app.attendance_count("SV001", "CS101").await, 4);
    assert_eq!(app.log_statuses().await, vec!["Present"]);
}

#[tokio::test]
async fn test_walk_in_is_logged_as_guest() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/attendance",
            json!({ "uid": "UID2", "device_id": "ESP-A1", "time_scan": NOW_0915 }),
            None,
        )
        .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(app.log_statuses().await, vec!["Guest"]);
    assert_eq!(app.attendance_count("SV002", "MA201").await, 5);
}

#[tokio::test]
async fn test_expected_absences_answer_with_200() {
    let app = TestApp::new().await;

    let cases = [
        json!({ "uid": "UID1", "device_id": "ESP-NEW", "time_scan": NOW_0915 }),
        json!({ "uid": "UID1", "device_id": "ESP-A1", "time_scan": NOW_0915 - 15 * 60 - 1 }),
        json!({ "uid": "NOPE", "device_id": "ESP-A1", "time_scan": NOW_0915 }),
    ];

    for body in cases {
        let response = app.post_json("/api/attendance", body, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    assert!(app.log_statuses().await.is_empty());
    assert_eq!(app.attendance_count("SV001", "CS101").await, 3);
}

#[tokio::test]
async fn test_blank_identifiers_are_rejected() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/attendance",
            json!({ "uid": "", "device_id": "ESP-A1", "time_scan": NOW_0915 }),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_roster_for_active_class() {
    let app = TestApp::new().await;

    let req = Request::builder()
        .uri("/api/students/ESP-A1")
        .body(Body::empty())
        .unwrap();
    let json = body_json(app.send(req).await).await;

    // SV003 is enrolled but has no badge.
    assert_eq!(json, json!([{ "uid": "UID1", "mssv": "SV001", "name": "Nguyen Van A" }]));
}

#[tokio::test]
async fn test_roster_for_unknown_or_unassigned_device_is_empty() {
    let app = TestApp::new().await;

    for uri in ["/api/students/ESP-GHOST", "/api/students/ESP-NEW"] {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.send(req).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }
}

#[tokio::test]
async fn test_landing_page_is_served() {
    let app = TestApp::new().await;
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    assert_eq!(app.send(req).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_datastore_outage_empties_roster_but_fails_health() {
    let app = TestApp::new().await;
    app.db.close().await;

    let req = Request::builder()
        .uri("/api/students/ESP-A1")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    assert_eq!(app.send(req).await.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
