//! Recommendation engine
//!
//! Assembly order is fixed: goal advice, then workout, nutrition, hydration,
//! recovery and habit imperatives, then the general pool. Duplicates keep
//! their first position and the list is truncated to
//! [`MAX_RECOMMENDATIONS`]; late entries are dropped silently.

use crate::models::{FitnessGoal, Profile};
use crate::stats::{
    HabitStats, HydrationStats, NutritionStats, RecoveryStats, Trend, WorkoutStats,
};

/// Upper bound on the number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Always-applicable advice appended last
pub const GENERAL_RECOMMENDATIONS: [&str; 2] = [
    "Aim for 7-9 hours of sleep each night",
    "Warm up before every session and cool down afterwards",
];

/// Two fixed recommendations per goal
pub fn goal_recommendations(goal: FitnessGoal) -> [&'static str; 2] {
    match goal {
        FitnessGoal::BuildMuscle => [
            "Focus on progressive overload - add weight or reps each week",
            "Eat a protein-rich meal within 2 hours after training",
        ],
        FitnessGoal::LoseFat => [
            "Combine strength training with 2-3 cardio sessions per week",
            "Keep a moderate calorie deficit instead of crash dieting",
        ],
        FitnessGoal::ImproveEndurance => [
            "Add one long, low-intensity session each week",
            "Include interval training twice a week",
        ],
    }
}

/// Metrics the engine reads; never raw entries
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInputs<'a> {
    pub profile: Option<&'a Profile>,
    pub workout: &'a WorkoutStats,
    pub nutrition: &'a NutritionStats,
    pub hydration: &'a HydrationStats,
    pub recovery: &'a RecoveryStats,
    pub habits: &'a HabitStats,
}

#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine {
    limit: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            limit: MAX_RECOMMENDATIONS,
        }
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recommend(&self, inputs: &RecommendationInputs<'_>) -> Vec<String> {
        let mut candidates = Vec::new();

        match inputs.profile.map(|p| p.goal) {
            Some(Some(goal)) => {
                candidates.extend(goal_recommendations(goal).iter().map(|s| s.to_string()))
            }
            Some(None) => candidates.push("Set a fitness goal to get goal-based recommendations".to_string()),
            None => candidates.push("Complete your profile to get goal-based recommendations".to_string()),
        }

        candidates.extend(workout_recommendations(inputs.workout));
        candidates.extend(nutrition_recommendations(inputs.nutrition));
        candidates.extend(hydration_recommendations(inputs.hydration));
        candidates.extend(recovery_recommendations(inputs.recovery));
        candidates.extend(habit_recommendations(inputs.habits));
        candidates.extend(GENERAL_RECOMMENDATIONS.iter().map(|s| s.to_string()));

        let mut recommendations: Vec<String> = Vec::with_capacity(self.limit);
        for candidate in candidates {
            if recommendations.len() == self.limit {
                break;
            }
            if !recommendations.contains(&candidate) {
                recommendations.push(candidate);
            }
        }
        recommendations
    }
}

fn workout_recommendations(stats: &WorkoutStats) -> Vec<String> {
    if stats.is_empty() {
        return vec!["Log your first workout to start tracking progress".to_string()];
    }

    let mut recs = Vec::new();
    if stats.workouts_this_week < 3 {
        recs.push("Schedule at least 3 workouts this week".to_string());
    }
    if stats.current_streak == 0 {
        recs.push("Log a workout today to restart your streak".to_string());
    }
    recs
}

fn nutrition_recommendations(stats: &NutritionStats) -> Vec<String> {
    if stats.is_empty() {
        return vec!["Log your meals to get nutrition guidance".to_string()];
    }

    let mut recs = Vec::new();
    if let (Some(targets), Some(progress)) = (&stats.targets, stats.calorie_progress) {
        if progress < 90.0 {
            recs.push(format!("Increase calorie intake toward {} kcal", targets.calories));
        } else if progress > 110.0 {
            recs.push(format!("Reduce portion sizes to stay near {} kcal", targets.calories));
        }
    }
    if let (Some(targets), Some(progress)) = (&stats.targets, stats.protein_progress) {
        if progress < 80.0 {
            recs.push(format!("Increase protein intake to {} g per day", targets.protein_g));
        }
    }
    recs
}

fn hydration_recommendations(stats: &HydrationStats) -> Vec<String> {
    if stats.is_empty() {
        return vec!["Track your water intake to build a hydration habit".to_string()];
    }

    let mut recs = Vec::new();
    if stats.today_progress < 80.0 {
        let remaining = (stats.daily_target_ml as u64).saturating_sub(stats.today_ml);
        recs.push(format!("Drink {} ml more water today", remaining));
    }
    recs
}

fn recovery_recommendations(stats: &RecoveryStats) -> Vec<String> {
    if stats.is_empty() {
        return vec!["Log daily energy levels to get recovery guidance".to_string()];
    }

    let mut recs = Vec::new();
    if stats.energy_entries > 0 && stats.average_energy < 5.0 {
        recs.push("Prioritize sleep and add a recovery day".to_string());
    }
    if stats.energy_trend == Trend::Declining {
        recs.push("Reduce training intensity until your energy recovers".to_string());
    }
    if stats.pain_frequency > 30.0 {
        recs.push("Consult a healthcare provider about recurring pain".to_string());
    }
    recs
}

fn habit_recommendations(stats: &HabitStats) -> Vec<String> {
    if stats.is_empty() {
        return vec!["Create a habit to track daily routines".to_string()];
    }

    let mut recs = Vec::new();
    if stats.average_completion_rate < 40.0 {
        recs.push("Reduce your habits to the 2-3 that matter most".to_string());
    } else if stats.average_completion_rate < 60.0 {
        recs.push("Attach habits to an existing routine to build consistency".to_string());
    }
    recs
}
