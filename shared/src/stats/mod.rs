//! Metric calculators
//!
//! Pure reductions from log entries to per-domain statistics. Every
//! calculator takes the reference day explicitly and accepts input in any
//! order. Empty input yields a zeroed stats value, never an error.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod habits;
pub mod hydration;
pub mod nutrition;
pub mod recovery;
pub mod schedule;
pub mod workout;

pub use habits::{HabitProgress, HabitStats};
pub use hydration::HydrationStats;
pub use nutrition::NutritionStats;
pub use recovery::RecoveryStats;
pub use schedule::{ScheduleStats, UpcomingEvent};
pub use workout::WorkoutStats;

/// Length of the short-term window used across domains
pub const WINDOW_DAYS: i64 = 7;

/// Mean difference between windows needed to call a trend
pub const TREND_THRESHOLD: f64 = 1.0;

/// Short-term direction of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    #[default]
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient_data",
        }
    }
}

/// Whole days between `date` and `today` (positive for past dates)
pub fn days_ago(today: NaiveDate, date: NaiveDate) -> i64 {
    (today - date).num_days()
}

/// Whether `date` falls within the last `days` days, today included
pub fn in_last_days(today: NaiveDate, date: NaiveDate, days: i64) -> bool {
    let offset = days_ago(today, date);
    (0..days).contains(&offset)
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Percentage of `completed` over `window`, 0 for an empty window
pub fn completion_rate(completed: usize, window: usize) -> f64 {
    if window == 0 {
        return 0.0;
    }
    completed as f64 / window as f64 * 100.0
}

/// Consecutive qualifying days ending at `today`
///
/// The walk starts at `today` itself: if today does not qualify the streak
/// is 0 even when yesterday did.
pub fn current_streak<I>(qualifying_days: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = qualifying_days.into_iter().collect();
    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

/// Compare the mean of the last 7 days against the 7 days before
///
/// Both windows need at least one sample. The difference must be strictly
/// greater than [`TREND_THRESHOLD`] to count as a change.
pub fn classify_trend(samples: &[(NaiveDate, f64)], today: NaiveDate) -> Trend {
    let mut recent = Vec::new();
    let mut previous = Vec::new();
    for (date, value) in samples {
        match days_ago(today, *date) {
            d if (0..WINDOW_DAYS).contains(&d) => recent.push(*value),
            d if (WINDOW_DAYS..WINDOW_DAYS * 2).contains(&d) => previous.push(*value),
            _ => {}
        }
    }

    if recent.is_empty() || previous.is_empty() {
        return Trend::InsufficientData;
    }

    let diff = mean(&recent) - mean(&previous);
    if diff > TREND_THRESHOLD {
        Trend::Improving
    } else if diff < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Round to one decimal place for display-oriented fields
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn ago(days: i64) -> NaiveDate {
        today() - Duration::days(days)
    }

    #[test]
    fn test_streak_counts_back_from_today() {
        let days = vec![ago(2), ago(0), ago(1), ago(4)];
        assert_eq!(current_streak(days, today()), 3);
    }

    #[test]
    fn test_streak_is_zero_without_today() {
        let days = vec![ago(1), ago(2), ago(3)];
        assert_eq!(current_streak(days, today()), 0);
    }

    #[test]
    fn test_streak_ignores_duplicates() {
        let days = vec![ago(0), ago(0), ago(1)];
        assert_eq!(current_streak(days, today()), 2);
    }

    #[test]
    fn test_trend_boundary_is_strict() {
        let mut samples: Vec<(NaiveDate, f64)> = (7..14).map(|d| (ago(d), 5.0)).collect();
        samples.extend((0..7).map(|d| (ago(d), 6.0)));
        assert_eq!(classify_trend(&samples, today()), Trend::Stable);

        let mut samples: Vec<(NaiveDate, f64)> = (7..14).map(|d| (ago(d), 5.0)).collect();
        samples.extend((0..7).map(|d| (ago(d), 6.01)));
        assert_eq!(classify_trend(&samples, today()), Trend::Improving);
    }

    #[test]
    fn test_trend_declining() {
        let mut samples: Vec<(NaiveDate, f64)> = (0..7).map(|d| (ago(d), 5.0)).collect();
        samples.extend((7..14).map(|d| (ago(d), 8.0)));
        assert_eq!(classify_trend(&samples, today()), Trend::Declining);
    }

    #[test]
    fn test_trend_needs_both_windows() {
        let samples: Vec<(NaiveDate, f64)> = (0..7).map(|d| (ago(d), 5.0)).collect();
        assert_eq!(classify_trend(&samples, today()), Trend::InsufficientData);
        assert_eq!(classify_trend(&[], today()), Trend::InsufficientData);
    }

    #[test]
    fn test_trend_ignores_samples_older_than_two_weeks() {
        let samples = vec![(ago(0), 9.0), (ago(8), 9.0), (ago(20), 1.0)];
        assert_eq!(classify_trend(&samples, today()), Trend::Stable);
    }

    #[test]
    fn test_in_last_days_excludes_future() {
        assert!(in_last_days(today(), ago(0), 7));
        assert!(in_last_days(today(), ago(6), 7));
        assert!(!in_last_days(today(), ago(7), 7));
        assert!(!in_last_days(today(), ago(-1), 7));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_streak_bounded_by_distinct_days(offsets in prop::collection::vec(0i64..30, 0..40)) {
            let days: Vec<NaiveDate> = offsets.iter().map(|d| ago(*d)).collect();
            let distinct: BTreeSet<_> = days.iter().cloned().collect();
            let streak = current_streak(days, today());
            prop_assert!(streak as usize <= distinct.len());
        }

        #[test]
        fn prop_streak_ignores_input_order(mut offsets in prop::collection::vec(0i64..10, 0..20)) {
            let forward: Vec<NaiveDate> = offsets.iter().map(|d| ago(*d)).collect();
            offsets.reverse();
            let backward: Vec<NaiveDate> = offsets.iter().map(|d| ago(*d)).collect();
            prop_assert_eq!(current_streak(forward, today()), current_streak(backward, today()));
        }

        #[test]
        fn prop_completion_rate_bounded(window in 1usize..100, completed_pct in 0usize..=100) {
            let completed = window * completed_pct / 100;
            let rate = completion_rate(completed, window);
            prop_assert!((0.0..=100.0).contains(&rate));
        }
    }
}
