//! Probe endpoints
//!
//! `/health` and `/health/live` answer as long as the process serves
//! requests. `/health/ready` also needs the database, since every report
//! is built from stored logs.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<ReadinessChecks>,
}

impl HealthResponse {
    fn plain(status: &'static str) -> Self {
        Self {
            status,
            version: VERSION,
            checks: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub database: Check,
    /// `disabled` when no Prometheus recorder is installed; never blocks readiness
    pub metrics: Check,
}

impl ReadinessChecks {
    fn ready(&self) -> bool {
        self.database.status == "healthy"
    }
}

#[derive(Debug, Serialize)]
pub struct Check {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Check {
    fn from_result(result: anyhow::Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                status: "healthy",
                message: None,
            },
            Err(e) => Self {
                status: "unhealthy",
                message: Some(e.to_string()),
            },
        }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::plain("healthy"))
}

pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::plain("alive"))
}

/// 503 with the failing check when the database does not answer
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let checks = ReadinessChecks {
        database: Check::from_result(db::health_check(state.db()).await),
        metrics: Check {
            status: if state.metrics.is_some() { "healthy" } else { "disabled" },
            message: None,
        },
    };
    readiness_response(checks)
}

fn readiness_response(checks: ReadinessChecks) -> (StatusCode, Json<HealthResponse>) {
    let (code, status) = if checks.ready() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: VERSION,
            checks: Some(checks),
        }),
    )
}
