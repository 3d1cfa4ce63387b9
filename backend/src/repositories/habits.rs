//! Habit and habit completion repositories

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use fitness_coach_shared::{DateRange, Habit, HabitCompletion};
use sqlx::PgPool;
use uuid::Uuid;

// ============================================================================
// Habits
// ============================================================================

/// Habit record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HabitRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub active: bool,
    pub created_at: NaiveDate,
}

impl From<HabitRecord> for Habit {
    fn from(record: HabitRecord) -> Self {
        Habit {
            id: record.id,
            name: record.name,
            active: record.active,
            created_at: record.created_at,
        }
    }
}

pub struct HabitRepository;

impl HabitRepository {
    /// Insert a habit; `None` when the user already has one with this name
    pub async fn create(pool: &PgPool, user_id: Uuid, name: &str) -> Result<Option<HabitRecord>> {
        let result = sqlx::query_as::<_, HabitRecord>(
            r#"
            INSERT INTO habits (user_id, name)
            VALUES ($1, $2)
            RETURNING id, user_id, name, active, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(pool)
        .await;

        match result {
            Ok(record) => Ok(Some(record)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Case-insensitive name check within one user's habits
    pub async fn name_exists(pool: &PgPool, user_id: Uuid, name: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM habits
                WHERE user_id = $1 AND LOWER(BTRIM(name)) = LOWER(BTRIM($2))
            )
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    pub async fn find(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<Option<HabitRecord>> {
        let record = sqlx::query_as::<_, HabitRecord>(
            r#"
            SELECT id, user_id, name, active, created_at
            FROM habits
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Habits created within the range
    pub async fn list(pool: &PgPool, user_id: Uuid, range: DateRange) -> Result<Vec<HabitRecord>> {
        let records = sqlx::query_as::<_, HabitRecord>(
            r#"
            SELECT id, user_id, name, active, created_at
            FROM habits
            WHERE user_id = $1
              AND ($2::date IS NULL OR created_at >= $2)
              AND ($3::date IS NULL OR created_at <= $3)
            ORDER BY name ASC
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

// ============================================================================
// Completions
// ============================================================================

/// Habit completion record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HabitCompletionRecord {
    pub habit_id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub completed: bool,
    pub recorded_at: DateTime<Utc>,
}

impl From<HabitCompletionRecord> for HabitCompletion {
    fn from(record: HabitCompletionRecord) -> Self {
        HabitCompletion {
            habit_id: record.habit_id,
            date: record.date,
            completed: record.completed,
            timestamp: record.recorded_at,
        }
    }
}

pub struct HabitCompletionRepository;

impl HabitCompletionRepository {
    /// Record the state for one habit-day, replacing any earlier record
    pub async fn upsert(
        pool: &PgPool,
        habit_id: Uuid,
        user_id: Uuid,
        date: NaiveDate,
        completed: bool,
    ) -> Result<HabitCompletionRecord> {
        let record = sqlx::query_as::<_, HabitCompletionRecord>(
            r#"
            INSERT INTO habit_completions (habit_id, user_id, date, completed)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (habit_id, date) DO UPDATE SET
                completed = EXCLUDED.completed,
                recorded_at = NOW()
            RETURNING habit_id, user_id, date, completed, recorded_at
            "#,
        )
        .bind(habit_id)
        .bind(user_id)
        .bind(date)
        .bind(completed)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<HabitCompletionRecord>> {
        let records = sqlx::query_as::<_, HabitCompletionRecord>(
            r#"
            SELECT habit_id, user_id, date, completed, recorded_at
            FROM habit_completions
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date DESC
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
