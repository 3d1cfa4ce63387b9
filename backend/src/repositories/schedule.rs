//! Scheduled event repository

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fitness_coach_shared::{DateRange, ScheduleEventRequest, ScheduledEvent};
use sqlx::PgPool;
use uuid::Uuid;

/// Scheduled event record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScheduledEventRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub event_type: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ScheduledEventRecord> for ScheduledEvent {
    fn from(record: ScheduledEventRecord) -> Self {
        ScheduledEvent {
            id: record.id,
            title: record.title,
            date: record.date,
            time: record.time,
            event_type: record.event_type,
            notes: record.notes,
        }
    }
}

pub struct ScheduledEventRepository;

impl ScheduledEventRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        input: &ScheduleEventRequest,
    ) -> Result<ScheduledEventRecord> {
        let record = sqlx::query_as::<_, ScheduledEventRecord>(
            r#"
            INSERT INTO scheduled_events (user_id, title, date, time, event_type, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, date, time, event_type, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(input.title.trim())
        .bind(input.date)
        .bind(input.time)
        .bind(input.event_type.trim().to_lowercase())
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<ScheduledEventRecord>> {
        let records = sqlx::query_as::<_, ScheduledEventRecord>(
            r#"
            SELECT id, user_id, title, date, time, event_type, notes, created_at
            FROM scheduled_events
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date ASC, time ASC
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
