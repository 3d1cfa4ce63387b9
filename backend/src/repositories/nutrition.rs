//! Nutrition log repository
//!
//! Amounts are stored as NUMERIC and surfaced as `f64` to the calculators.

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fitness_coach_shared::{DateRange, LogNutritionRequest, NutritionEntry};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Nutrition log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NutritionLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub food_name: String,
    pub calories: Decimal,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<NutritionLogRecord> for NutritionEntry {
    fn from(record: NutritionLogRecord) -> Self {
        NutritionEntry {
            id: record.id,
            date: record.date,
            time: record.time,
            food_name: record.food_name,
            calories: record.calories.to_f64().unwrap_or(0.0),
            protein_g: record.protein_g.to_f64().unwrap_or(0.0),
            carbs_g: record.carbs_g.to_f64().unwrap_or(0.0),
            fat_g: record.fat_g.to_f64().unwrap_or(0.0),
        }
    }
}

/// Convert to a 2-decimal NUMERIC value
fn to_decimal(field: &str, value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| anyhow!("{} is not a finite number", field))
}

pub struct NutritionLogRepository;

impl NutritionLogRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        input: &LogNutritionRequest,
    ) -> Result<NutritionLogRecord> {
        let record = sqlx::query_as::<_, NutritionLogRecord>(
            r#"
            INSERT INTO nutrition_logs (user_id, date, time, food_name, calories, protein_g, carbs_g, fat_g)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, date, time, food_name, calories, protein_g, carbs_g, fat_g, created_at
            "#,
        )
        .bind(user_id)
        .bind(input.date)
        .bind(input.time)
        .bind(input.food_name.trim())
        .bind(to_decimal("calories", input.calories)?)
        .bind(to_decimal("protein_g", input.protein_g)?)
        .bind(to_decimal("carbs_g", input.carbs_g)?)
        .bind(to_decimal("fat_g", input.fat_g)?)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<NutritionLogRecord>> {
        let records = sqlx::query_as::<_, NutritionLogRecord>(
            r#"
            SELECT id, user_id, date, time, food_name, calories, protein_g, carbs_g, fat_g, created_at
            FROM nutrition_logs
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_to_decimal_rounds_to_cents() {
        assert_eq!(to_decimal("calories", 123.456).unwrap(), Decimal::from_str("123.46").unwrap());
        assert!(to_decimal("calories", f64::NAN).is_err());
    }

    #[test]
    fn test_record_into_entry() {
        let entry: NutritionEntry = NutritionLogRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            time: None,
            food_name: "Rice".to_string(),
            calories: Decimal::from_str("206.50").unwrap(),
            protein_g: Decimal::from_str("4.3").unwrap(),
            carbs_g: Decimal::from(45),
            fat_g: Decimal::ZERO,
            created_at: Utc::now(),
        }
        .into();

        assert!((entry.calories - 206.5).abs() < 1e-9);
        assert!((entry.protein_g - 4.3).abs() < 1e-9);
    }
}
