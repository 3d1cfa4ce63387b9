//! Energy expenditure and macro target calculations
//!
//! Targets are derived from the user profile only:
//!
//! 1. BMR via Mifflin-St Jeor without the sex-specific offset
//! 2. TDEE with a fixed sedentary multiplier
//! 3. A per-goal calorie delta and macro split
//!
//! Calories stay fractional through the chain; only the displayed calorie
//! value and the gram amounts are rounded.

use crate::models::{FitnessGoal, Profile};
use serde::{Deserialize, Serialize};

/// Sedentary activity multiplier applied to BMR
pub const TDEE_MULTIPLIER: f64 = 1.2;

/// kcal per gram of protein or carbohydrate
const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;

/// kcal per gram of fat
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Calorie delta and macro split for a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustment {
    pub calorie_delta: f64,
    pub protein_ratio: f64,
    pub carbs_ratio: f64,
    pub fat_ratio: f64,
}

impl GoalAdjustment {
    /// Adjustment for a goal; `None` uses the maintenance split
    pub fn for_goal(goal: Option<FitnessGoal>) -> Self {
        match goal {
            Some(FitnessGoal::BuildMuscle) => Self::new(300.0, 0.30, 0.50, 0.20),
            Some(FitnessGoal::LoseFat) => Self::new(-500.0, 0.35, 0.35, 0.30),
            Some(FitnessGoal::ImproveEndurance) => Self::new(200.0, 0.20, 0.60, 0.20),
            None => Self::new(0.0, 0.25, 0.45, 0.30),
        }
    }

    const fn new(calorie_delta: f64, protein_ratio: f64, carbs_ratio: f64, fat_ratio: f64) -> Self {
        Self {
            calorie_delta,
            protein_ratio,
            carbs_ratio,
            fat_ratio,
        }
    }
}

/// Daily calorie and macro targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub bmr: f64,
    pub tdee: f64,
    /// Unrounded target calories
    pub target_calories: f64,
    /// Target calories rounded for display
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

/// Gram amounts for a calorie budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
}

/// Basal metabolic rate
///
/// Formula: 10 × weight(kg) + 6.25 × height(cm) − 5 × age
///
/// The +5 (male) / −161 (female) term of the published equation is not
/// applied; every user gets the same constant.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64
}

/// Total daily energy expenditure from BMR
pub fn calculate_tdee(bmr: f64) -> f64 {
    bmr * TDEE_MULTIPLIER
}

/// Split a calorie budget into grams using the goal's ratios
pub fn macros_for_calories(calories: f64, goal: Option<FitnessGoal>) -> MacroGrams {
    let adjustment = GoalAdjustment::for_goal(goal);
    MacroGrams {
        protein_g: (calories * adjustment.protein_ratio / KCAL_PER_GRAM_PROTEIN_CARBS).round() as i64,
        carbs_g: (calories * adjustment.carbs_ratio / KCAL_PER_GRAM_PROTEIN_CARBS).round() as i64,
        fat_g: (calories * adjustment.fat_ratio / KCAL_PER_GRAM_FAT).round() as i64,
    }
}

/// Full target chain for a profile
pub fn macro_targets(profile: &Profile) -> MacroTargets {
    let bmr = calculate_bmr(profile.weight_kg, profile.height_cm, profile.age);
    let tdee = calculate_tdee(bmr);
    let target_calories = tdee + GoalAdjustment::for_goal(profile.goal).calorie_delta;
    let grams = macros_for_calories(target_calories, profile.goal);

    MacroTargets {
        bmr,
        tdee,
        target_calories,
        calories: target_calories.round() as i64,
        protein_g: grams.protein_g,
        carbs_g: grams.carbs_g,
        fat_g: grams.fat_g,
    }
}
