//! Report service
//!
//! Loads a user's logs through an [`AsyncLogStore`] under a deadline, then
//! hands the snapshot to the synchronous [`Coach`].

use crate::error::ApiError;
use crate::repositories::AsyncLogStore;
use chrono::{NaiveDate, NaiveDateTime};
use fitness_coach_shared::insights;
use fitness_coach_shared::{Coach, LogSnapshot, Report, TodaySummary};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use uuid::Uuid;

/// Counter incremented once per built report
pub const REPORTS_BUILT_TOTAL: &str = "coach_reports_built_total";

/// Histogram of load + build time in seconds
pub const REPORT_BUILD_SECONDS: &str = "coach_report_build_seconds";

/// Domain selector for the per-domain stats endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsDomain {
    Workouts,
    Nutrition,
    Hydration,
    Recovery,
    Habits,
    Schedule,
}

impl StatsDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsDomain::Workouts => "workouts",
            StatsDomain::Nutrition => "nutrition",
            StatsDomain::Hydration => "hydration",
            StatsDomain::Recovery => "recovery",
            StatsDomain::Habits => "habits",
            StatsDomain::Schedule => "schedule",
        }
    }
}

impl fmt::Display for StatsDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatsDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workouts" => Ok(StatsDomain::Workouts),
            "nutrition" => Ok(StatsDomain::Nutrition),
            "hydration" => Ok(StatsDomain::Hydration),
            "recovery" => Ok(StatsDomain::Recovery),
            "habits" => Ok(StatsDomain::Habits),
            "schedule" => Ok(StatsDomain::Schedule),
            other => Err(format!("Unknown stats domain: {}", other)),
        }
    }
}

/// Stats and insights for one domain
#[derive(Debug, Clone, Serialize)]
pub struct DomainStatsView {
    pub domain: StatsDomain,
    pub stats: serde_json::Value,
    pub insights: Vec<String>,
}

pub struct ReportService;

impl ReportService {
    async fn load_snapshot<S>(
        store: &S,
        user_id: Uuid,
        today: NaiveDate,
        timeout: Duration,
    ) -> Result<LogSnapshot, ApiError>
    where
        S: AsyncLogStore + ?Sized,
    {
        match tokio::time::timeout(timeout, store.snapshot(user_id, today)).await {
            Ok(snapshot) => snapshot.map_err(ApiError::Internal),
            Err(_) => {
                warn!(user_id = %user_id, timeout_ms = timeout.as_millis() as u64, "Log fetch timed out");
                Err(ApiError::Timeout)
            }
        }
    }

    /// Full dashboard report as of `as_of`
    pub async fn build_report<S>(
        store: &S,
        coach: &Coach,
        user_id: Uuid,
        as_of: NaiveDateTime,
        timeout: Duration,
    ) -> Result<Report, ApiError>
    where
        S: AsyncLogStore + ?Sized,
    {
        let started = Instant::now();
        let snapshot = Self::load_snapshot(store, user_id, as_of.date(), timeout).await?;
        let report = coach.build_report(&snapshot, user_id, as_of);
        let elapsed = started.elapsed();

        metrics::counter!(REPORTS_BUILT_TOTAL).increment(1);
        metrics::histogram!(REPORT_BUILD_SECONDS).record(elapsed.as_secs_f64());
        info!(
            user_id = %user_id,
            as_of = %as_of,
            elapsed_ms = elapsed.as_millis() as u64,
            "Report built"
        );

        Ok(report)
    }

    pub async fn today<S>(
        store: &S,
        coach: &Coach,
        user_id: Uuid,
        as_of: NaiveDateTime,
        timeout: Duration,
    ) -> Result<TodaySummary, ApiError>
    where
        S: AsyncLogStore + ?Sized,
    {
        Ok(Self::build_report(store, coach, user_id, as_of, timeout)
            .await?
            .today)
    }

    pub async fn domain_stats<S>(
        store: &S,
        coach: &Coach,
        user_id: Uuid,
        as_of: NaiveDateTime,
        domain: StatsDomain,
        timeout: Duration,
    ) -> Result<DomainStatsView, ApiError>
    where
        S: AsyncLogStore + ?Sized,
    {
        let snapshot = Self::load_snapshot(store, user_id, as_of.date(), timeout).await?;
        let (profile, stats) = coach.compute_stats(&snapshot, user_id, as_of);
        let goal = profile.as_ref().and_then(|p| p.goal);

        let (value, insights) = match domain {
            StatsDomain::Workouts => (
                serde_json::to_value(&stats.workout),
                insights::workout_insights(&stats.workout, goal),
            ),
            StatsDomain::Nutrition => (
                serde_json::to_value(&stats.nutrition),
                insights::nutrition_insights(&stats.nutrition),
            ),
            StatsDomain::Hydration => (
                serde_json::to_value(&stats.hydration),
                insights::hydration_insights(&stats.hydration),
            ),
            StatsDomain::Recovery => (
                serde_json::to_value(&stats.recovery),
                insights::recovery_insights(&stats.recovery),
            ),
            StatsDomain::Habits => (
                serde_json::to_value(&stats.habits),
                insights::habit_insights(&stats.habits),
            ),
            StatsDomain::Schedule => (
                serde_json::to_value(&stats.schedule),
                insights::schedule_insights(&stats.schedule),
            ),
        };

        Ok(DomainStatsView {
            domain,
            stats: value.map_err(|e| ApiError::Internal(e.into()))?,
            insights,
        })
    }
}
