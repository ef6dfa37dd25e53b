use sqlx::SqlitePool;

use crate::models::{
    ClassSession, ClassSummary, Device, Enrollment, InstructorCredential,
    RosterEntry, StatisticsRow, Student,
};

pub async fn find_device(db: &SqlitePool, device_id: &str) -> Result<Option<Device>, sqlx::Error> {
    sqlx::query_as::<_, Device>("SELECT device_id, room FROM devices WHERE device_id = ?")
        .bind(device_id)
        .fetch_optional(db)
        .await
}

pub async fn find_student_by_badge(
    db: &SqlitePool,
    badge_uid: &str,
) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>(
        "SELECT student_number, badge_uid, full_name FROM students WHERE badge_uid = ?",
    )
    .bind(badge_uid)
    .fetch_optional(db)
    .await
}

pub async fn fetch_sessions_in_room(
    db: &SqlitePool,
    room: &str,
) -> Result<Vec<ClassSession>, sqlx::Error> {
    sqlx::query_as::<_, ClassSession>(
        r#"
        SELECT class_code, class_name, room, start_time, end_time, instructor_username
        FROM class_sessions
        WHERE room = ?
        ORDER BY class_code ASC
        "#,
    )
    .bind(room)
    .fetch_all(db)
    .await
}

pub async fn find_session(
    db: &SqlitePool,
    class_code: &str,
) -> Result<Option<ClassSession>, sqlx::Error> {
    sqlx::query_as::<_, ClassSession>(
        r#"
        SELECT class_code, class_name, room, start_time, end_time, instructor_username
        FROM class_sessions
        WHERE class_code = ?
        "#,
    )
    .bind(class_code)
    .fetch_optional(db)
    .await
}

pub async fn find_enrollment(
    db: &SqlitePool,
    student_number: &str,
    class_code: &str,
) -> Result<Option<Enrollment>, sqlx::Error> {
    sqlx::query_as::<_, Enrollment>(
        r#"
        SELECT id, student_number, class_code, attendance_count, absence_count
        FROM enrollments
        WHERE student_number = ? AND class_code = ?
        "#,
    )
    .bind(student_number)
    .bind(class_code)
    .fetch_optional(db)
    .await
}

/// Adds `delta` to the enrollment's attendance count and returns the new
/// value. Returns `None` when the row is gone or the result would be
/// negative; nothing is written in that case.
pub async fn adjust_attendance_count(
    db: &SqlitePool,
    enrollment_id: i64,
    delta: i64,
) -> Result<Option<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE enrollments
        SET attendance_count = attendance_count + ?1
        WHERE id = ?2 AND attendance_count + ?1 >= 0
        RETURNING attendance_count
        "#,
    )
    .bind(delta)
    .bind(enrollment_id)
    .fetch_optional(db)
    .await
}

pub async fn insert_attendance_log(
    db: &SqlitePool,
    student_number: &str,
    device_id: &str,
    logged_at: &str,
    status: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO attendance_logs (student_number, device_id, logged_at, status)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(student_number)
    .bind(device_id)
    .bind(logged_at)
    .bind(status)
    .execute(db)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Enrolled students that carry a badge, in enrollment order.
pub async fn fetch_roster(db: &SqlitePool, class_code: &str) -> Result<Vec<RosterEntry>, sqlx::Error> {
    sqlx::query_as::<_, RosterEntry>(
        r#"
        SELECT s.badge_uid AS uid, s.student_number AS mssv, s.full_name AS name
        FROM enrollments e
        JOIN students s ON s.student_number = e.student_number
        WHERE e.class_code = ?
          AND s.badge_uid IS NOT NULL
          AND s.badge_uid != ''
        ORDER BY e.id ASC
        "#,
    )
    .bind(class_code)
    .fetch_all(db)
    .await
}

pub async fn find_instructor(
    db: &SqlitePool,
    username: &str,
) -> Result<Option<InstructorCredential>, sqlx::Error> {
    sqlx::query_as::<_, InstructorCredential>(
        "SELECT username, password_hash FROM instructors WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(db)
    .await
}

pub async fn fetch_classes_for_instructor(
    db: &SqlitePool,
    username: &str,
) -> Result<Vec<ClassSummary>, sqlx::Error> {
    sqlx::query_as::<_, ClassSummary>(
        r#"
        SELECT class_code, class_name
        FROM class_sessions
        WHERE instructor_username = ?
        ORDER BY class_code ASC
        "#,
    )
    .bind(username)
    .fetch_all(db)
    .await
}

/// Statistics rows for one class, filtered on the owner as well so another
/// instructor's class simply yields nothing.
pub async fn fetch_statistics(
    db: &SqlitePool,
    username: &str,
    class_code: &str,
) -> Result<Vec<StatisticsRow>, sqlx::Error> {
    sqlx::query_as::<_, StatisticsRow>(
        r#"
        SELECT class_code, class_name, student_number, full_name, attendance_count, absence_count
        FROM class_statistics
        WHERE instructor_username = ? AND class_code = ?
        ORDER BY student_number ASC
        "#,
    )
    .bind(username)
    .bind(class_code)
    .fetch_all(db)
    .await
}
