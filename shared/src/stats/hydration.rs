//! Hydration statistics

use super::{completion_rate, current_streak, in_last_days, round1, WINDOW_DAYS};
use crate::models::HydrationEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily intake target used when none is configured
pub const DEFAULT_DAILY_TARGET_ML: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HydrationStats {
    pub total_entries: usize,
    pub daily_target_ml: u32,
    pub today_ml: u64,
    /// Today's intake as a percentage of the target
    pub today_progress: f64,
    /// Mean intake over logged days in the last 7 days
    pub average_daily_ml: f64,
    /// Consecutive days (ending today) meeting the target
    pub current_streak: u32,
    /// Share of logged days in the last 7 that met the target
    pub target_achievement: f64,
}

impl HydrationStats {
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }
}

pub fn calculate(entries: &[HydrationEntry], target_ml: u32, today: NaiveDate) -> HydrationStats {
    let mut daily: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for entry in entries {
        *daily.entry(entry.date).or_default() += entry.amount_ml as u64;
    }

    let met_target = |total: u64| target_ml > 0 && total >= target_ml as u64;

    let today_ml = daily.get(&today).copied().unwrap_or(0);
    let recent: Vec<u64> = daily
        .iter()
        .filter(|(date, _)| in_last_days(today, **date, WINDOW_DAYS))
        .map(|(_, total)| *total)
        .collect();
    let met_days = recent.iter().filter(|total| met_target(**total)).count();

    let average_daily_ml = if recent.is_empty() {
        0.0
    } else {
        recent.iter().sum::<u64>() as f64 / recent.len() as f64
    };

    let today_progress = if target_ml == 0 {
        0.0
    } else {
        today_ml as f64 / target_ml as f64 * 100.0
    };

    HydrationStats {
        total_entries: entries.len(),
        daily_target_ml: target_ml,
        today_ml,
        today_progress: round1(today_progress),
        average_daily_ml: round1(average_daily_ml),
        current_streak: current_streak(
            daily
                .iter()
                .filter(|(_, total)| met_target(**total))
                .map(|(date, _)| *date),
            today,
        ),
        target_achievement: round1(completion_rate(met_days, recent.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn drink(days_ago: i64, amount_ml: u32) -> HydrationEntry {
        HydrationEntry {
            id: Uuid::new_v4(),
            date: today() - Duration::days(days_ago),
            time: None,
            amount_ml,
        }
    }

    #[test]
    fn test_empty_hydration_is_zeroed() {
        let stats = calculate(&[], 2000, today());
        assert!(stats.is_empty());
        assert_eq!(stats.today_ml, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.target_achievement, 0.0);
        assert_eq!(stats.average_daily_ml, 0.0);
    }

    #[test]
    fn test_three_day_streak() {
        let entries = vec![drink(2, 2200), drink(0, 2200), drink(1, 2200)];
        let stats = calculate(&entries, 2000, today());
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.target_achievement, 100.0);
        assert_eq!(stats.today_progress, 110.0);
    }

    #[test]
    fn test_achievement_over_logged_days_only() {
        let entries = vec![drink(0, 1000), drink(0, 1200), drink(1, 500), drink(3, 2500), drink(5, 100)];
        let stats = calculate(&entries, 2000, today());
        // 4 logged days, 2 met the target
        assert_eq!(stats.target_achievement, 50.0);
        assert_eq!(stats.today_ml, 2200);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.average_daily_ml, 1325.0);
    }

    #[test]
    fn test_zero_target_never_met() {
        let stats = calculate(&[drink(0, 500)], 0, today());
        assert_eq!(stats.today_progress, 0.0);
        assert_eq!(stats.current_streak, 0);
    }
}
