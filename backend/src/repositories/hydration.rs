//! Hydration log repository

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fitness_coach_shared::{DateRange, HydrationEntry, LogHydrationRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Hydration log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HydrationLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub amount_ml: i32,
    pub created_at: DateTime<Utc>,
}

impl From<HydrationLogRecord> for HydrationEntry {
    fn from(record: HydrationLogRecord) -> Self {
        HydrationEntry {
            id: record.id,
            date: record.date,
            time: record.time,
            amount_ml: record.amount_ml.max(0) as u32,
        }
    }
}

pub struct HydrationLogRepository;

impl HydrationLogRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        input: &LogHydrationRequest,
    ) -> Result<HydrationLogRecord> {
        let record = sqlx::query_as::<_, HydrationLogRecord>(
            r#"
            INSERT INTO hydration_logs (user_id, date, time, amount_ml)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, date, time, amount_ml, created_at
            "#,
        )
        .bind(user_id)
        .bind(input.date)
        .bind(input.time)
        .bind(i32::try_from(input.amount_ml)?)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<HydrationLogRecord>> {
        let records = sqlx::query_as::<_, HydrationLogRecord>(
            r#"
            SELECT id, user_id, date, time, amount_ml, created_at
            FROM hydration_logs
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date DESC, time DESC NULLS LAST
            "#,
        )
        .bind(user_id)
        .bind(range.from)
        .bind(range.to)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
