//! Workout log repository
//!
//! Exercises are stored as a JSONB array on the workout row.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use fitness_coach_shared::{DateRange, Exercise, LogWorkoutRequest, WorkoutEntry};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Workout log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub name: Option<String>,
    pub exercises: Json<Vec<Exercise>>,
    pub created_at: DateTime<Utc>,
}

impl From<WorkoutLogRecord> for WorkoutEntry {
    fn from(record: WorkoutLogRecord) -> Self {
        WorkoutEntry {
            id: record.id,
            date: record.date,
            name: record.name,
            exercises: record.exercises.0,
        }
    }
}

pub struct WorkoutLogRepository;

impl WorkoutLogRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        input: &LogWorkoutRequest,
    ) -> Result<WorkoutLogRecord> {
        let exercises: Vec<Exercise> = input
            .exercises
            .iter()
            .map(|e| Exercise {
                name: e.name.trim().to_string(),
                sets: e.sets,
                reps: e.reps,
                weight: e.weight,
            })
            .collect();

        let record = sqlx::query_as::<_, WorkoutLogRecord>(
            r#"
            INSERT INTO workout_logs (user_id, date, name, exercises)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, date, name, exercises, created_at
            "#,
        )
        .bind(user_id)
        .bind(input.date)
        .bind(&input.name)
        .bind(Json(exercises))
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<WorkoutLogRecord>> {
        let records = sqlx::query_as::<_, WorkoutLogRecord>(
            r#"
            SELECT id, user_id, date, name, exercises, created_at
            FROM workout_logs
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date DESC, created_at DESC
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
