//! Dashboard API routes: the aggregated report and its slices

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::PgLogStore;
use crate::services::{DomainStatsView, ReportService, StatsDomain};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDateTime;
use fitness_coach_shared::{Report, TodaySummary};
use serde::Deserialize;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/report", get(get_report))
        .route("/today", get(get_today))
        .route("/stats/:domain", get(get_domain_stats))
}

/// Reference time for a report
///
/// Clients send their local wall-clock time; without it the server's local
/// time is used.
#[derive(Debug, Default, Deserialize)]
pub struct AsOfQuery {
    pub as_of: Option<NaiveDateTime>,
}

impl AsOfQuery {
    fn resolve(&self) -> NaiveDateTime {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}

/// GET /api/v1/dashboard/report - Full cross-domain report
async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<Report>, ApiError> {
    let store = PgLogStore::new(state.db().clone());
    let report = ReportService::build_report(
        &store,
        state.coach(),
        auth.user_id,
        query.resolve(),
        state.report_timeout(),
    )
    .await?;

    Ok(Json(report))
}

/// GET /api/v1/dashboard/today - Today's totals and upcoming events
async fn get_today(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<TodaySummary>, ApiError> {
    let store = PgLogStore::new(state.db().clone());
    let today = ReportService::today(
        &store,
        state.coach(),
        auth.user_id,
        query.resolve(),
        state.report_timeout(),
    )
    .await?;

    Ok(Json(today))
}

/// GET /api/v1/dashboard/stats/:domain - One domain's stats and insights
async fn get_domain_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(domain): Path<String>,
    Query(query): Query<AsOfQuery>,
) -> Result<Json<DomainStatsView>, ApiError> {
    let domain: StatsDomain = domain.parse().map_err(ApiError::BadRequest)?;
    let store = PgLogStore::new(state.db().clone());
    let view = ReportService::domain_stats(
        &store,
        state.coach(),
        auth.user_id,
        query.resolve(),
        domain,
        state.report_timeout(),
    )
    .await?;

    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_explicit_as_of_wins() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let query = AsOfQuery { as_of: Some(as_of) };
        assert_eq!(query.resolve(), as_of);
    }

    #[test]
    fn test_as_of_query_parses() {
        let query: AsOfQuery = serde_json::from_str(r#"{"as_of":"2025-06-15T18:45:00"}"#).unwrap();
        assert_eq!(query.as_of.unwrap().to_string(), "2025-06-15 18:45:00");
    }
}
