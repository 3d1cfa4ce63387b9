//! Workout statistics

use super::{current_streak, in_last_days, round1, WINDOW_DAYS};
use crate::models::{Profile, WorkoutEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    /// Σ weight × sets × reps over every logged exercise
    pub total_volume: f64,
    pub average_volume: f64,
    pub workouts_this_week: usize,
    pub current_streak: u32,
    /// Workouts per week since the profile was created
    pub workouts_per_week: f64,
    pub favorite_exercise: Option<String>,
    pub last_workout: Option<NaiveDate>,
}

impl WorkoutStats {
    pub fn is_empty(&self) -> bool {
        self.total_workouts == 0
    }
}

pub fn calculate(
    workouts: &[WorkoutEntry],
    profile: Option<&Profile>,
    today: NaiveDate,
) -> WorkoutStats {
    if workouts.is_empty() {
        return WorkoutStats::default();
    }

    let total_workouts = workouts.len();
    let total_volume: f64 = workouts.iter().map(WorkoutEntry::volume).sum();
    let workouts_this_week = workouts
        .iter()
        .filter(|w| in_last_days(today, w.date, WINDOW_DAYS))
        .count();
    let current_streak = current_streak(workouts.iter().map(|w| w.date), today);

    let first_workout = workouts.iter().map(|w| w.date).min().unwrap_or(today);
    let tracking_since = profile.map(|p| p.created_at).unwrap_or(first_workout);

    WorkoutStats {
        total_workouts,
        total_volume,
        average_volume: round1(total_volume / total_workouts as f64),
        workouts_this_week,
        current_streak,
        workouts_per_week: round1(workout_frequency(total_workouts, tracking_since, today)),
        favorite_exercise: favorite_exercise(workouts),
        last_workout: workouts.iter().map(|w| w.date).max(),
    }
}

/// Workouts per week, with at least one week as the divisor
pub fn workout_frequency(total_workouts: usize, since: NaiveDate, today: NaiveDate) -> f64 {
    let weeks = ((today - since).num_days() / 7).max(1);
    total_workouts as f64 / weeks as f64
}

/// Most frequently logged exercise name; ties go to the alphabetically first
fn favorite_exercise(workouts: &[WorkoutEntry]) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for exercise in workouts.iter().flat_map(|w| &w.exercises) {
        *counts.entry(exercise.name.as_str()).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, Exercise};
    use chrono::Duration;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn workout(days_ago: i64, exercises: &[(&str, u32, u32, f64)]) -> WorkoutEntry {
        WorkoutEntry {
            id: Uuid::new_v4(),
            date: today() - Duration::days(days_ago),
            name: None,
            exercises: exercises
                .iter()
                .map(|(name, sets, reps, weight)| Exercise {
                    name: name.to_string(),
                    sets: *sets,
                    reps: *reps,
                    weight: *weight,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_workouts_are_zeroed() {
        let stats = calculate(&[], None, today());
        assert_eq!(stats, WorkoutStats::default());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_volume_and_streak() {
        let workouts = vec![
            workout(1, &[("Bench Press", 3, 10, 60.0)]),
            workout(0, &[("Squat", 5, 5, 100.0), ("Bench Press", 3, 8, 65.0)]),
            workout(3, &[("Deadlift", 1, 5, 140.0)]),
        ];
        let stats = calculate(&workouts, None, today());

        assert_eq!(stats.total_workouts, 3);
        assert_eq!(stats.total_volume, 1800.0 + 2500.0 + 1560.0 + 700.0);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.workouts_this_week, 3);
        assert_eq!(stats.favorite_exercise.as_deref(), Some("Bench Press"));
        assert_eq!(stats.last_workout, Some(today()));
    }

    #[test]
    fn test_frequency_uses_profile_creation() {
        let profile = Profile {
            age: 30,
            weight_kg: 80.0,
            height_cm: 180.0,
            goal: None,
            experience: ExperienceLevel::Intermediate,
            medical: String::new(),
            created_at: today() - Duration::days(28),
        };
        let workouts: Vec<_> = (0..8).map(|d| workout(d * 3, &[("Row", 3, 10, 40.0)])).collect();
        let stats = calculate(&workouts, Some(&profile), today());
        assert_eq!(stats.workouts_per_week, 2.0);
    }

    #[test]
    fn test_frequency_floors_weeks_at_one() {
        assert_eq!(workout_frequency(3, today(), today()), 3.0);
        assert_eq!(workout_frequency(3, today() - Duration::days(6), today()), 3.0);
    }

    #[test]
    fn test_favorite_exercise_tie_is_alphabetical() {
        let workouts = vec![workout(0, &[("Squat", 1, 1, 1.0), ("Curl", 1, 1, 1.0)])];
        let stats = calculate(&workouts, None, today());
        assert_eq!(stats.favorite_exercise.as_deref(), Some("Curl"));
    }
}
