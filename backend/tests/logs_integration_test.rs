//! Integration tests for log and habit endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_workout_returns_created_entry() {
    let app = common::TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/logs/workouts",
            r#"{"date": "2025-06-15", "name": "Legs",
                "exercises": [{"name": "Squat", "sets": 3, "reps": 5, "weight": 100.0}]}"#,
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "body: {}", body);
    let entry = common::json(&body);
    assert_eq!(entry["exercises"][0]["name"], "Squat");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_nutrition_keeps_two_decimals() {
    let app = common::TestApp::new().await;

    let (status, body) = app
        .post(
            "/api/v1/logs/nutrition",
            r#"{"date": "2025-06-15", "food_name": "Oats", "calories": 389.456, "protein_g": 16.9}"#,
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "body: {}", body);
    assert_eq!(common::json(&body)["calories"], 389.46);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_energy_and_pain_readings() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/v1/logs/pain-fatigue",
            r#"{"date": "2025-06-15", "type": "energy", "level": 7}"#,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post(
            "/api/v1/logs/pain-fatigue",
            r#"{"date": "2025-06-15", "type": "pain", "level": 12}"#,
        )
        .await;
    assert!(status.is_client_error(), "body: {}", body);

    let (status, body) = app
        .post(
            "/api/v1/logs/pain-fatigue",
            r#"{"date": "2025-06-15", "type": "energy", "level": 11}"#,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::json(&body)["error"]["field"], "level");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_hydration_and_schedule() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/v1/logs/hydration",
            r#"{"date": "2025-06-15", "amount_ml": 500}"#,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post(
            "/api/v1/logs/schedule",
            r#"{"title": "Leg day", "date": "2025-06-16", "time": "18:00:00", "type": "Workout"}"#,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "body: {}", body);
    assert_eq!(common::json(&body)["type"], "workout");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_habit_name_conflicts() {
    let app = common::TestApp::new().await;

    let (status, _) = app.post("/api/v1/habits", r#"{"name": "Stretch"}"#).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.post("/api/v1/habits", r#"{"name": "  stretch "}"#).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(common::json(&body)["error"]["code"], "CONFLICT");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_concurrent_duplicate_habits_conflict() {
    let app = common::TestApp::new().await;

    let (first, second) = tokio::join!(
        app.post("/api/v1/habits", r#"{"name": "Walk"}"#),
        app.post("/api/v1/habits", r#"{"name": "walk"}"#),
    );

    let mut statuses = vec![first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_habit_completion_replaces_same_day() {
    let app = common::TestApp::new().await;

    let (_, body) = app.post("/api/v1/habits", r#"{"name": "Meditate"}"#).await;
    let id = common::json(&body)["id"].as_str().unwrap().to_string();
    let path = format!("/api/v1/habits/{}/completions", id);

    let (status, _) = app.post(&path, r#"{"date": "2025-06-15"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .post(&path, r#"{"date": "2025-06-15", "completed": false}"#)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json(&body)["completed"], false);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM habit_completions WHERE user_id = $1")
        .bind(app.user_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_completion_for_unknown_habit_is_not_found() {
    let app = common::TestApp::new().await;

    let path = format!("/api/v1/habits/{}/completions", uuid::Uuid::new_v4());
    let (status, _) = app.post(&path, r#"{"date": "2025-06-15"}"#).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
