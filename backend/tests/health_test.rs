//! Integration tests for health check endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get_anonymous("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get_anonymous("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_reports_metrics_disabled() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get_anonymous("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    let body = common::json(&body);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["metrics"]["status"], "disabled");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_metrics_without_recorder_is_not_found() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get_anonymous("/metrics").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_api_v1_root() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get_anonymous("/api/v1/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Fitness Coach API v1"));
}
