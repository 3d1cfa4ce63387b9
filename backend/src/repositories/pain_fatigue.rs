//! Pain and energy log repository
//!
//! Both reading kinds share one table; `kind` selects which columns apply.

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fitness_coach_shared::{DateRange, LogPainFatigueRequest, PainFatigueEntry, PainFatigueReading};
use sqlx::PgPool;
use uuid::Uuid;

/// Pain/fatigue log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PainFatigueLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub kind: String,
    pub level: Option<i16>,
    pub location: Option<String>,
    pub intensity: Option<i16>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PainFatigueLogRecord {
    pub fn into_entry(self) -> Result<PainFatigueEntry> {
        let reading = match (self.kind.as_str(), self.level, self.intensity) {
            ("energy", Some(level), _) => PainFatigueReading::Energy {
                level: u8::try_from(level)?,
            },
            ("pain", _, Some(intensity)) => PainFatigueReading::Pain {
                location: self.location.unwrap_or_default(),
                intensity: u8::try_from(intensity)?,
                notes: self.notes,
            },
            (kind, _, _) => return Err(anyhow!("Malformed {} reading {}", kind, self.id)),
        };

        Ok(PainFatigueEntry {
            id: self.id,
            date: self.date,
            time: self.time,
            reading,
        })
    }
}

pub struct PainFatigueLogRepository;

impl PainFatigueLogRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        input: &LogPainFatigueRequest,
    ) -> Result<PainFatigueLogRecord> {
        let (kind, level, location, intensity, notes) = match &input.reading {
            PainFatigueReading::Energy { level } => ("energy", Some(*level as i16), None, None, None),
            PainFatigueReading::Pain {
                location,
                intensity,
                notes,
            } => (
                "pain",
                None,
                Some(location.trim().to_string()),
                Some(*intensity as i16),
                notes.clone(),
            ),
        };

        let record = sqlx::query_as::<_, PainFatigueLogRecord>(
            r#"
            INSERT INTO pain_fatigue_logs (user_id, date, time, kind, level, location, intensity, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, date, time, kind, level, location, intensity, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(input.date)
        .bind(input.time)
        .bind(kind)
        .bind(level)
        .bind(location)
        .bind(intensity)
        .bind(notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list(
        pool: &PgPool,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<PainFatigueLogRecord>> {
        let records = sqlx::query_as::<_, PainFatigueLogRecord>(
            r#"
            SELECT id, user_id, date, time, kind, level, location, intensity, notes, created_at
            FROM pain_fatigue_logs
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

    fn record(kind: &str, level: Option<i16>, intensity: Option<i16>) -> PainFatigueLogRecord {
        PainFatigueLogRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            time: None,
            kind: kind.to_string(),
            level,
            location: Some("lower back".to_string()),
            intensity,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_energy_record() {
        let entry = record("energy", Some(6), None).into_entry().unwrap();
        assert_eq!(entry.energy_level(), Some(6));
    }

    #[test]
    fn test_pain_record() {
        let entry = record("pain", None, Some(7)).into_entry().unwrap();
        assert_eq!(entry.pain(), Some(("lower back", 7)));
    }

    #[test]
    fn test_malformed_record() {
        assert!(record("energy", None, Some(3)).into_entry().is_err());
        assert!(record("mood", Some(3), None).into_entry().is_err());
    }
}
