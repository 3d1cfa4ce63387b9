//! Habit statistics

use super::{completion_rate, current_streak, round1, WINDOW_DAYS};
use crate::models::{CompletionIndex, Habit};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-habit progress over the last 7 days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitProgress {
    pub habit_id: Uuid,
    pub name: String,
    pub current_streak: u32,
    pub completion_rate: f64,
    pub completed_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HabitStats {
    pub total_habits: usize,
    pub active_habits: usize,
    pub today_completed: usize,
    pub today_completion_rate: f64,
    /// Completed habit-days over active habits × 7
    pub average_completion_rate: f64,
    pub best_streak: u32,
    pub habits: Vec<HabitProgress>,
}

impl HabitStats {
    /// No active habits to report on
    pub fn is_empty(&self) -> bool {
        self.active_habits == 0
    }
}

pub fn calculate(habits: &[Habit], completions: &CompletionIndex, today: NaiveDate) -> HabitStats {
    let mut active: Vec<&Habit> = habits.iter().filter(|h| h.active).collect();
    active.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

    if active.is_empty() {
        return HabitStats {
            total_habits: habits.len(),
            ..HabitStats::default()
        };
    }

    let window: Vec<NaiveDate> = (0..WINDOW_DAYS).map(|d| today - Duration::days(d)).collect();

    let progress: Vec<HabitProgress> = active
        .iter()
        .map(|habit| {
            let completed_days = completed_in_window(habit.id, completions, &window);
            HabitProgress {
                habit_id: habit.id,
                name: habit.name.clone(),
                current_streak: current_streak(completions.completed_dates(habit.id), today),
                completion_rate: round1(completion_rate(completed_days, window.len())),
                completed_today: completions.is_completed(habit.id, today),
            }
        })
        .collect();

    let today_completed = progress.iter().filter(|p| p.completed_today).count();
    let completed_habit_days: usize = active
        .iter()
        .map(|habit| completed_in_window(habit.id, completions, &window))
        .sum();

    HabitStats {
        total_habits: habits.len(),
        active_habits: active.len(),
        today_completed,
        today_completion_rate: round1(completion_rate(today_completed, active.len())),
        average_completion_rate: round1(completion_rate(
            completed_habit_days,
            active.len() * window.len(),
        )),
        best_streak: progress.iter().map(|p| p.current_streak).max().unwrap_or(0),
        habits: progress,
    }
}

fn completed_in_window(habit_id: Uuid, completions: &CompletionIndex, window: &[NaiveDate]) -> usize {
    window
        .iter()
        .filter(|day| completions.is_completed(habit_id, **day))
        .count()
}
