//! Profile repository

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use fitness_coach_shared::{ExperienceLevel, FitnessGoal, Profile, UpsertProfileRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// Profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub user_id: Uuid,
    pub age: i32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub goal: Option<String>,
    pub experience: String,
    pub medical: String,
    pub created_at: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn into_profile(self) -> Result<Profile> {
        let goal = self
            .goal
            .as_deref()
            .map(str::parse::<FitnessGoal>)
            .transpose()
            .map_err(anyhow::Error::msg)?;
        let experience: ExperienceLevel = self.experience.parse().map_err(anyhow::Error::msg)?;

        Ok(Profile {
            age: u32::try_from(self.age)?,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            goal,
            experience,
            medical: self.medical,
            created_at: self.created_at,
        })
    }
}

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn find(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT user_id, age, weight_kg, height_cm, goal, experience, medical, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Insert or replace the profile; `created_at` is kept from the first save
    pub async fn upsert(
        pool: &PgPool,
        user_id: Uuid,
        input: &UpsertProfileRequest,
    ) -> Result<ProfileRecord> {
        let record = sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO profiles (user_id, age, weight_kg, height_cm, goal, experience, medical)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
                age = EXCLUDED.age,
                weight_kg = EXCLUDED.weight_kg,
                height_cm = EXCLUDED.height_cm,
                goal = EXCLUDED.goal,
                experience = EXCLUDED.experience,
                medical = EXCLUDED.medical,
                updated_at = NOW()
            RETURNING user_id, age, weight_kg, height_cm, goal, experience, medical, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(i32::try_from(input.age)?)
        .bind(input.weight_kg)
        .bind(input.height_cm)
        .bind(input.goal.map(|g| g.as_str()))
        .bind(input.experience.as_str())
        .bind(&input.medical)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(goal: Option<&str>, experience: &str) -> ProfileRecord {
        ProfileRecord {
            user_id: Uuid::new_v4(),
            age: 30,
            weight_kg: 72.5,
            height_cm: 180.0,
            goal: goal.map(str::to_string),
            experience: experience.to_string(),
            medical: String::new(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_record_into_profile() {
        let profile = record(Some("lose-fat"), "advanced").into_profile().unwrap();
        assert_eq!(profile.goal, Some(FitnessGoal::LoseFat));
        assert_eq!(profile.experience, ExperienceLevel::Advanced);
        assert_eq!(profile.age, 30);
    }

    #[test]
    fn test_unknown_goal_is_an_error() {
        assert!(record(Some("get-huge"), "beginner").into_profile().is_err());
        assert!(record(None, "beginner").into_profile().is_ok());
    }
}
