//! Nutrition statistics

use super::{in_last_days, round1, WINDOW_DAYS};
use crate::health_metrics::{macro_targets, MacroTargets};
use crate::models::{NutritionEntry, Profile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionStats {
    pub total_entries: usize,
    pub today_calories: f64,
    pub today_protein_g: f64,
    pub today_carbs_g: f64,
    pub today_fat_g: f64,
    pub today_meals: usize,
    /// Days with at least one entry in the last 7 days
    pub days_logged: usize,
    /// Mean daily calories over logged days in the last 7 days
    pub average_daily_calories: f64,
    /// Present only when a profile is available
    pub targets: Option<MacroTargets>,
    /// Today's calories as a percentage of the target
    pub calorie_progress: Option<f64>,
    /// Today's protein as a percentage of the target
    pub protein_progress: Option<f64>,
}

impl NutritionStats {
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }
}

pub fn calculate(
    entries: &[NutritionEntry],
    profile: Option<&Profile>,
    today: NaiveDate,
) -> NutritionStats {
    let targets = profile.map(macro_targets);

    let mut daily_calories: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for entry in entries.iter().filter(|e| in_last_days(today, e.date, WINDOW_DAYS)) {
        *daily_calories.entry(entry.date).or_default() += entry.calories;
    }

    let todays: Vec<&NutritionEntry> = entries.iter().filter(|e| e.date == today).collect();
    let today_calories: f64 = todays.iter().map(|e| e.calories).sum();
    let today_protein_g: f64 = todays.iter().map(|e| e.protein_g).sum();

    let days_logged = daily_calories.len();
    let average_daily_calories = if days_logged == 0 {
        0.0
    } else {
        daily_calories.values().sum::<f64>() / days_logged as f64
    };

    let (calorie_progress, protein_progress) = match &targets {
        Some(t) if !entries.is_empty() => (
            Some(percent_of(today_calories, t.target_calories)),
            Some(percent_of(today_protein_g, t.protein_g as f64)),
        ),
        _ => (None, None),
    };

    NutritionStats {
        total_entries: entries.len(),
        today_calories,
        today_protein_g,
        today_carbs_g: todays.iter().map(|e| e.carbs_g).sum(),
        today_fat_g: todays.iter().map(|e| e.fat_g).sum(),
        today_meals: todays.len(),
        days_logged,
        average_daily_calories: round1(average_daily_calories),
        targets,
        calorie_progress,
        protein_progress,
    }
}

fn percent_of(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    round1(value / target * 100.0)
}
