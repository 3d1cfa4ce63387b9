//! Log store backed by PostgreSQL
//!
//! [`AsyncLogStore`] is the async counterpart of the core's `LogStore`:
//! implementations list one domain at a time and
//! [`snapshot`](AsyncLogStore::snapshot) gathers every domain into a
//! [`LogSnapshot`] that the synchronous report builder consumes.

use super::{
    HabitCompletionRepository, HabitRepository, HydrationLogRepository, NutritionLogRepository,
    PainFatigueLogRepository, ProfileRepository, ScheduledEventRepository, WorkoutLogRepository,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use fitness_coach_shared::{
    DateRange, Habit, HabitCompletion, HydrationEntry, LogSnapshot, LogStore, NutritionEntry,
    PainFatigueEntry, Profile, ProfileProvider, ScheduledEvent, WorkoutEntry,
};
use sqlx::PgPool;
use uuid::Uuid;

#[async_trait]
pub trait AsyncLogStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>>;
    async fn list_workouts(&self, user_id: Uuid, range: DateRange) -> Result<Vec<WorkoutEntry>>;
    async fn list_nutrition(&self, user_id: Uuid, range: DateRange) -> Result<Vec<NutritionEntry>>;
    async fn list_hydration(&self, user_id: Uuid, range: DateRange) -> Result<Vec<HydrationEntry>>;
    async fn list_pain_fatigue(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<PainFatigueEntry>>;
    async fn list_habits(&self, user_id: Uuid, range: DateRange) -> Result<Vec<Habit>>;
    async fn list_habit_completions(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<HabitCompletion>>;
    async fn list_scheduled_events(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<ScheduledEvent>>;

    /// Everything a report as of `today` can read, fetched concurrently
    ///
    /// Logs dated after `today` are left out; scheduled events are not,
    /// since the schedule looks ahead.
    async fn snapshot(&self, user_id: Uuid, today: NaiveDate) -> Result<LogSnapshot> {
        let history = DateRange::until(today);

        let (
            profile,
            workouts,
            nutrition,
            hydration,
            pain_fatigue,
            habits,
            habit_completions,
            scheduled_events,
        ) = tokio::try_join!(
            self.get_profile(user_id),
            self.list_workouts(user_id, history),
            self.list_nutrition(user_id, history),
            self.list_hydration(user_id, history),
            self.list_pain_fatigue(user_id, history),
            self.list_habits(user_id, history),
            self.list_habit_completions(user_id, history),
            self.list_scheduled_events(user_id, DateRange::all()),
        )?;

        Ok(LogSnapshot {
            profile,
            workouts,
            nutrition,
            hydration,
            pain_fatigue,
            habits,
            habit_completions,
            scheduled_events,
        })
    }
}

/// In-memory store, for client-supplied snapshots and tests
#[async_trait]
impl AsyncLogStore for LogSnapshot {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        Ok(ProfileProvider::get_profile(self, user_id))
    }

    async fn list_workouts(&self, user_id: Uuid, range: DateRange) -> Result<Vec<WorkoutEntry>> {
        Ok(LogStore::list_workouts(self, user_id, range))
    }

    async fn list_nutrition(&self, user_id: Uuid, range: DateRange) -> Result<Vec<NutritionEntry>> {
        Ok(LogStore::list_nutrition(self, user_id, range))
    }

    async fn list_hydration(&self, user_id: Uuid, range: DateRange) -> Result<Vec<HydrationEntry>> {
        Ok(LogStore::list_hydration(self, user_id, range))
    }

    async fn list_pain_fatigue(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<PainFatigueEntry>> {
        Ok(LogStore::list_pain_fatigue(self, user_id, range))
    }

    async fn list_habits(&self, user_id: Uuid, range: DateRange) -> Result<Vec<Habit>> {
        Ok(LogStore::list_habits(self, user_id, range))
    }

    async fn list_habit_completions(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<HabitCompletion>> {
        Ok(LogStore::list_habit_completions(self, user_id, range))
    }

    async fn list_scheduled_events(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<ScheduledEvent>> {
        Ok(LogStore::list_scheduled_events(self, user_id, range))
    }
}

/// Log store over the per-domain repositories
#[derive(Clone)]
pub struct PgLogStore {
    pool: PgPool,
}

impl PgLogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AsyncLogStore for PgLogStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        ProfileRepository::find(&self.pool, user_id)
            .await?
            .map(|record| record.into_profile())
            .transpose()
    }

    async fn list_workouts(&self, user_id: Uuid, range: DateRange) -> Result<Vec<WorkoutEntry>> {
        let records = WorkoutLogRepository::list(&self.pool, user_id, range).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn list_nutrition(&self, user_id: Uuid, range: DateRange) -> Result<Vec<NutritionEntry>> {
        let records = NutritionLogRepository::list(&self.pool, user_id, range).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn list_hydration(&self, user_id: Uuid, range: DateRange) -> Result<Vec<HydrationEntry>> {
        let records = HydrationLogRepository::list(&self.pool, user_id, range).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn list_pain_fatigue(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<PainFatigueEntry>> {
        PainFatigueLogRepository::list(&self.pool, user_id, range)
            .await?
            .into_iter()
            .map(|record| record.into_entry())
            .collect()
    }

    async fn list_habits(&self, user_id: Uuid, range: DateRange) -> Result<Vec<Habit>> {
        let records = HabitRepository::list(&self.pool, user_id, range).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn list_habit_completions(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<HabitCompletion>> {
        let records = HabitCompletionRepository::list(&self.pool, user_id, range).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn list_scheduled_events(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> Result<Vec<ScheduledEvent>> {
        let records = ScheduledEventRepository::list(&self.pool, user_id, range).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
