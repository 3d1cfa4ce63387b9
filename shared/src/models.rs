//! Data models for the Fitness Coach application
//!
//! All log entities are read-only inputs to the aggregation core. They are
//! created and validated at the write boundary (see [`crate::validation`]).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Profile
// ============================================================================

/// Training goal selected in the user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    BuildMuscle,
    LoseFat,
    ImproveEndurance,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::BuildMuscle => "build-muscle",
            FitnessGoal::LoseFat => "lose-fat",
            FitnessGoal::ImproveEndurance => "improve-endurance",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "build-muscle" => Ok(FitnessGoal::BuildMuscle),
            "lose-fat" => Ok(FitnessGoal::LoseFat),
            "improve-endurance" => Ok(FitnessGoal::ImproveEndurance),
            other => Err(format!("Unknown fitness goal: {}", other)),
        }
    }
}

/// Training experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            other => Err(format!("Unknown experience level: {}", other)),
        }
    }
}

/// User profile needed for targets and workout generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    pub goal: Option<FitnessGoal>,
    pub experience: ExperienceLevel,
    /// Free-text medical notes (injuries, conditions)
    #[serde(default)]
    pub medical: String,
    /// Day the profile was first saved
    pub created_at: NaiveDate,
}

// ============================================================================
// Log entries
// ============================================================================

/// One exercise inside a logged workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    /// Load in kilograms (0 for bodyweight)
    pub weight: f64,
}

impl Exercise {
    /// Training volume: weight × sets × reps
    pub fn volume(&self) -> f64 {
        self.weight * self.sets as f64 * self.reps as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub name: Option<String>,
    pub exercises: Vec<Exercise>,
}

impl WorkoutEntry {
    pub fn volume(&self) -> f64 {
        self.exercises.iter().map(Exercise::volume).sum()
    }
}

/// A single logged food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub food_name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub amount_ml: u32,
}

/// Energy or pain reading; exactly one shape per entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PainFatigueReading {
    Energy {
        /// 0-10
        level: u8,
    },
    Pain {
        location: String,
        /// 1-10
        intensity: u8,
        #[serde(default)]
        notes: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainFatigueEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    #[serde(flatten)]
    pub reading: PainFatigueReading,
}

impl PainFatigueEntry {
    pub fn energy_level(&self) -> Option<u8> {
        match self.reading {
            PainFatigueReading::Energy { level } => Some(level),
            PainFatigueReading::Pain { .. } => None,
        }
    }

    pub fn pain(&self) -> Option<(&str, u8)> {
        match &self.reading {
            PainFatigueReading::Pain {
                location,
                intensity,
                ..
            } => Some((location.as_str(), *intensity)),
            PainFatigueReading::Energy { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitCompletion {
    pub habit_id: Uuid,
    pub date: NaiveDate,
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
}

/// Completion records keyed by `(habit_id, date)`
///
/// Built once per report from the raw completion list. When the source holds
/// more than one record for the same key, the latest timestamp wins; on a
/// timestamp tie a completed record beats an uncompleted one.
#[derive(Debug, Clone, Default)]
pub struct CompletionIndex {
    records: BTreeMap<(Uuid, NaiveDate), HabitCompletion>,
}

impl CompletionIndex {
    pub fn new(completions: &[HabitCompletion]) -> Self {
        let mut records: BTreeMap<(Uuid, NaiveDate), HabitCompletion> = BTreeMap::new();
        for completion in completions {
            let key = (completion.habit_id, completion.date);
            let replace = records.get(&key).map_or(true, |existing| {
                (completion.timestamp, completion.completed)
                    > (existing.timestamp, existing.completed)
            });
            if replace {
                records.insert(key, completion.clone());
            }
        }
        Self { records }
    }

    pub fn get(&self, habit_id: Uuid, date: NaiveDate) -> Option<&HabitCompletion> {
        self.records.get(&(habit_id, date))
    }

    pub fn is_completed(&self, habit_id: Uuid, date: NaiveDate) -> bool {
        self.get(habit_id, date).map(|c| c.completed).unwrap_or(false)
    }

    /// Days on which the habit was marked completed, oldest first
    pub fn completed_dates(&self, habit_id: Uuid) -> impl Iterator<Item = NaiveDate> + '_ {
        self.records
            .range((habit_id, NaiveDate::MIN)..=(habit_id, NaiveDate::MAX))
            .filter(|(_, record)| record.completed)
            .map(|((_, date), _)| *date)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Free-form category, e.g. "workout", "meal-prep", "appointment"
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ScheduledEvent {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Inclusive date filter for log queries; `None` bounds are open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn until(to: NaiveDate) -> Self {
        Self {
            from: None,
            to: Some(to),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_workout_volume() {
        let workout = WorkoutEntry {
            id: Uuid::new_v4(),
            date: date(1),
            name: None,
            exercises: vec![
                Exercise { name: "Squat".into(), sets: 3, reps: 5, weight: 100.0 },
                Exercise { name: "Push-up".into(), sets: 3, reps: 20, weight: 0.0 },
            ],
        };
        assert_eq!(workout.volume(), 1500.0);
    }

    #[test]
    fn test_goal_round_trip_through_str() {
        for goal in [FitnessGoal::BuildMuscle, FitnessGoal::LoseFat, FitnessGoal::ImproveEndurance] {
            assert_eq!(goal.as_str().parse::<FitnessGoal>().unwrap(), goal);
        }
        assert!("get-swole".parse::<FitnessGoal>().is_err());
    }

    #[test]
    fn test_pain_reading_serializes_with_type_tag() {
        let entry = PainFatigueEntry {
            id: Uuid::nil(),
            date: date(2),
            time: None,
            reading: PainFatigueReading::Pain {
                location: "knee".into(),
                intensity: 4,
                notes: None,
            },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "pain");
        assert_eq!(json["location"], "knee");
        let back: PainFatigueEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_completion_index_keeps_latest_record() {
        let habit_id = Uuid::new_v4();
        let earlier = HabitCompletion {
            habit_id,
            date: date(5),
            completed: true,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 5, 8, 0, 0).unwrap(),
        };
        let later = HabitCompletion {
            completed: false,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 5, 20, 0, 0).unwrap(),
            ..earlier.clone()
        };

        let index = CompletionIndex::new(&[later.clone(), earlier]);
        assert_eq!(index.len(), 1);
        assert!(!index.is_completed(habit_id, date(5)));
        assert!(!index.is_completed(habit_id, date(6)));
    }

    #[test]
    fn test_completion_index_timestamp_tie_prefers_completed() {
        let habit_id = Uuid::new_v4();
        let done = HabitCompletion {
            habit_id,
            date: date(5),
            completed: true,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 5, 8, 0, 0).unwrap(),
        };
        let undone = HabitCompletion {
            completed: false,
            ..done.clone()
        };

        let forward = CompletionIndex::new(&[done.clone(), undone.clone()]);
        let reverse = CompletionIndex::new(&[undone, done.clone()]);
        assert_eq!(forward.get(habit_id, date(5)), Some(&done));
        assert_eq!(reverse.get(habit_id, date(5)), Some(&done));
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let range = DateRange { from: Some(date(2)), to: Some(date(4)) };
        assert!(!range.contains(date(1)));
        assert!(range.contains(date(2)));
        assert!(range.contains(date(4)));
        assert!(!range.contains(date(5)));
        assert!(DateRange::all().contains(date(1)));
    }
}
