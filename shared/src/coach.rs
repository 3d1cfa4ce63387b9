//! Report aggregation
//!
//! [`Coach::build_report`] is the single read path: it pulls every domain's
//! entries through a [`LogStore`], runs the calculators, insight rules and
//! recommendation engine, and assembles a [`Report`]. The build is a pure
//! function of the store contents and `as_of`; nothing reads the clock.

use crate::insights::{self, DomainInsights};
use crate::models::{
    CompletionIndex, DateRange, Habit, HabitCompletion, HydrationEntry, NutritionEntry,
    PainFatigueEntry, Profile, ScheduledEvent, WorkoutEntry,
};
use crate::recommendations::{RecommendationEngine, RecommendationInputs};
use crate::stats::{
    self, HabitStats, HydrationStats, NutritionStats, RecoveryStats, ScheduleStats,
    UpcomingEvent, WorkoutStats,
};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Energy below this suggests a lighter session
pub const LOW_ENERGY_THRESHOLD: u8 = 4;

/// Energy above this suggests an intense session
pub const HIGH_ENERGY_THRESHOLD: u8 = 7;

/// Pain above this suggests rest
pub const SEVERE_PAIN_THRESHOLD: u8 = 6;

// ============================================================================
// Store seams
// ============================================================================

/// Read access to a user's logs
///
/// Implementations return entries already scoped to `user_id`, in any order.
pub trait LogStore {
    fn list_workouts(&self, user_id: Uuid, range: DateRange) -> Vec<WorkoutEntry>;
    fn list_nutrition(&self, user_id: Uuid, range: DateRange) -> Vec<NutritionEntry>;
    fn list_hydration(&self, user_id: Uuid, range: DateRange) -> Vec<HydrationEntry>;
    fn list_pain_fatigue(&self, user_id: Uuid, range: DateRange) -> Vec<PainFatigueEntry>;
    fn list_habits(&self, user_id: Uuid, range: DateRange) -> Vec<Habit>;
    fn list_habit_completions(&self, user_id: Uuid, range: DateRange) -> Vec<HabitCompletion>;
    fn list_scheduled_events(&self, user_id: Uuid, range: DateRange) -> Vec<ScheduledEvent>;
}

pub trait ProfileProvider {
    fn get_profile(&self, user_id: Uuid) -> Option<Profile>;
}

/// One user's logs, already loaded
///
/// Used by the server after a batched fetch, by the browser build and by
/// tests. The `user_id` passed to the trait methods is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSnapshot {
    pub profile: Option<Profile>,
    pub workouts: Vec<WorkoutEntry>,
    pub nutrition: Vec<NutritionEntry>,
    pub hydration: Vec<HydrationEntry>,
    pub pain_fatigue: Vec<PainFatigueEntry>,
    pub habits: Vec<Habit>,
    pub habit_completions: Vec<HabitCompletion>,
    pub scheduled_events: Vec<ScheduledEvent>,
}

fn filter_by_date<T: Clone>(items: &[T], range: DateRange, date: impl Fn(&T) -> NaiveDate) -> Vec<T> {
    items
        .iter()
        .filter(|item| range.contains(date(item)))
        .cloned()
        .collect()
}

impl LogStore for LogSnapshot {
    fn list_workouts(&self, _user_id: Uuid, range: DateRange) -> Vec<WorkoutEntry> {
        filter_by_date(&self.workouts, range, |e| e.date)
    }

    fn list_nutrition(&self, _user_id: Uuid, range: DateRange) -> Vec<NutritionEntry> {
        filter_by_date(&self.nutrition, range, |e| e.date)
    }

    fn list_hydration(&self, _user_id: Uuid, range: DateRange) -> Vec<HydrationEntry> {
        filter_by_date(&self.hydration, range, |e| e.date)
    }

    fn list_pain_fatigue(&self, _user_id: Uuid, range: DateRange) -> Vec<PainFatigueEntry> {
        filter_by_date(&self.pain_fatigue, range, |e| e.date)
    }

    fn list_habits(&self, _user_id: Uuid, range: DateRange) -> Vec<Habit> {
        filter_by_date(&self.habits, range, |h| h.created_at)
    }

    fn list_habit_completions(&self, _user_id: Uuid, range: DateRange) -> Vec<HabitCompletion> {
        filter_by_date(&self.habit_completions, range, |c| c.date)
    }

    fn list_scheduled_events(&self, _user_id: Uuid, range: DateRange) -> Vec<ScheduledEvent> {
        filter_by_date(&self.scheduled_events, range, |e| e.date)
    }
}

impl ProfileProvider for LogSnapshot {
    fn get_profile(&self, _user_id: Uuid) -> Option<Profile> {
        self.profile.clone()
    }
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DomainStats {
    pub workout: WorkoutStats,
    pub nutrition: NutritionStats,
    pub hydration: HydrationStats,
    pub recovery: RecoveryStats,
    pub habits: HabitStats,
    pub schedule: ScheduleStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachMessage {
    pub greeting: String,
    pub lines: Vec<String>,
}

/// Snapshot of the reference day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub date: NaiveDate,
    pub workouts: usize,
    pub calories: f64,
    pub protein_g: f64,
    pub water_ml: u64,
    pub hydration_progress: f64,
    pub energy: Option<u8>,
    pub max_pain: Option<u8>,
    pub habits_completed: usize,
    pub habits_active: usize,
    /// Events on the reference day, by start time
    pub events: Vec<UpcomingEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub user_id: Uuid,
    pub as_of: NaiveDateTime,
    pub stats: DomainStats,
    pub insights: DomainInsights,
    pub recommendations: Vec<String>,
    pub coach_message: CoachMessage,
    pub today: TodaySummary,
}

// ============================================================================
// Facade
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachSettings {
    pub hydration_target_ml: u32,
}

impl Default for CoachSettings {
    fn default() -> Self {
        Self {
            hydration_target_ml: stats::hydration::DEFAULT_DAILY_TARGET_ML,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Coach {
    settings: CoachSettings,
    engine: RecommendationEngine,
}

impl Coach {
    pub fn new(settings: CoachSettings) -> Self {
        Self {
            settings,
            engine: RecommendationEngine::new(),
        }
    }

    pub fn settings(&self) -> CoachSettings {
        self.settings
    }

    /// Per-domain statistics as of `as_of`
    pub fn compute_stats<S>(&self, store: &S, user_id: Uuid, as_of: NaiveDateTime) -> (Option<Profile>, DomainStats)
    where
        S: LogStore + ProfileProvider + ?Sized,
    {
        let today = as_of.date();
        let history = DateRange::until(today);

        let profile = store.get_profile(user_id);
        let workouts = store.list_workouts(user_id, history);
        let nutrition = store.list_nutrition(user_id, history);
        let hydration = store.list_hydration(user_id, history);
        let pain_fatigue = store.list_pain_fatigue(user_id, history);
        let habits = store.list_habits(user_id, history);
        let completions = CompletionIndex::new(&store.list_habit_completions(user_id, history));
        // Upcoming events lie in the future
        let events = store.list_scheduled_events(user_id, DateRange::all());

        let stats = DomainStats {
            workout: stats::workout::calculate(&workouts, profile.as_ref(), today),
            nutrition: stats::nutrition::calculate(&nutrition, profile.as_ref(), today),
            hydration: stats::hydration::calculate(&hydration, self.settings.hydration_target_ml, today),
            recovery: stats::recovery::calculate(&pain_fatigue, today),
            habits: stats::habits::calculate(&habits, &completions, today),
            schedule: stats::schedule::calculate(&events, as_of),
        };

        (profile, stats)
    }

    pub fn build_report<S>(&self, store: &S, user_id: Uuid, as_of: NaiveDateTime) -> Report
    where
        S: LogStore + ProfileProvider + ?Sized,
    {
        tracing::debug!(user_id = %user_id, as_of = %as_of, "Building report");

        let (profile, stats) = self.compute_stats(store, user_id, as_of);
        let goal = profile.as_ref().and_then(|p| p.goal);

        let insights = DomainInsights {
            workout: insights::workout_insights(&stats.workout, goal),
            nutrition: insights::nutrition_insights(&stats.nutrition),
            hydration: insights::hydration_insights(&stats.hydration),
            recovery: insights::recovery_insights(&stats.recovery),
            habits: insights::habit_insights(&stats.habits),
            schedule: insights::schedule_insights(&stats.schedule),
        };

        let recommendations = self.engine.recommend(&RecommendationInputs {
            profile: profile.as_ref(),
            workout: &stats.workout,
            nutrition: &stats.nutrition,
            hydration: &stats.hydration,
            recovery: &stats.recovery,
            habits: &stats.habits,
        });

        let coach_message = coach_message(as_of, profile.is_some(), &stats.recovery, &recommendations);
        let today = today_summary(store, user_id, as_of, &stats);

        tracing::debug!(
            user_id = %user_id,
            recommendations = recommendations.len(),
            "Report built"
        );

        Report {
            user_id,
            as_of,
            stats,
            insights,
            recommendations,
            coach_message,
            today,
        }
    }
}

/// Greeting for the hour of `as_of`
pub fn greeting(as_of: NaiveDateTime) -> &'static str {
    match as_of.hour() {
        h if h < 12 => "Good morning",
        h if h < 17 => "Good afternoon",
        _ => "Good evening",
    }
}

fn coach_message(
    as_of: NaiveDateTime,
    has_profile: bool,
    recovery: &RecoveryStats,
    recommendations: &[String],
) -> CoachMessage {
    let mut lines = Vec::new();

    if !has_profile {
        lines.push("Complete your profile to get personalized targets and workouts".to_string());
    }

    match recovery.today_energy {
        Some(level) if level < LOW_ENERGY_THRESHOLD => lines.push(
            "Your energy is low today - consider a lighter workout or active recovery".to_string(),
        ),
        Some(level) if level > HIGH_ENERGY_THRESHOLD => {
            lines.push("Your energy is high today - a great day for an intense workout".to_string())
        }
        _ => {}
    }

    if recovery.today_max_pain.is_some_and(|p| p > SEVERE_PAIN_THRESHOLD) {
        lines.push(
            "You reported significant pain today - rest and consider consulting a healthcare provider"
                .to_string(),
        );
    }

    if let Some(first) = recommendations.first() {
        lines.push(format!("Today's focus: {}", first));
    }

    CoachMessage {
        greeting: greeting(as_of).to_string(),
        lines,
    }
}

fn today_summary<S>(store: &S, user_id: Uuid, as_of: NaiveDateTime, stats: &DomainStats) -> TodaySummary
where
    S: LogStore + ?Sized,
{
    let today = as_of.date();
    let only_today = DateRange {
        from: Some(today),
        to: Some(today),
    };

    let workouts = store.list_workouts(user_id, only_today).len();

    let mut events: Vec<ScheduledEvent> = store.list_scheduled_events(user_id, only_today);
    events.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.title.cmp(&b.title)));

    TodaySummary {
        date: today,
        workouts,
        calories: stats.nutrition.today_calories,
        protein_g: stats.nutrition.today_protein_g,
        water_ml: stats.hydration.today_ml,
        hydration_progress: stats.hydration.today_progress,
        energy: stats.recovery.today_energy,
        max_pain: stats.recovery.today_max_pain,
        habits_completed: stats.habits.today_completed,
        habits_active: stats.habits.active_habits,
        events: events
            .into_iter()
            .map(|e| UpcomingEvent {
                starts_at: e.starts_at(),
                title: e.title,
                event_type: e.event_type,
            })
            .collect(),
    }
}
