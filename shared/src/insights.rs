//! Insight generators
//!
//! Each domain has its own rule table. Rules run in a fixed order and every
//! matching rule contributes a line, so several insights can co-occur. A
//! domain without data yields exactly one placeholder line.

use crate::models::FitnessGoal;
use crate::stats::{
    HabitStats, HydrationStats, NutritionStats, RecoveryStats, ScheduleStats, Trend, WorkoutStats,
};
use serde::{Deserialize, Serialize};

/// Insight lines for every domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DomainInsights {
    pub workout: Vec<String>,
    pub nutrition: Vec<String>,
    pub hydration: Vec<String>,
    pub recovery: Vec<String>,
    pub habits: Vec<String>,
    pub schedule: Vec<String>,
}

fn placeholder(domain: &str) -> Vec<String> {
    vec![format!(
        "No {} data yet - start logging to get insights",
        domain
    )]
}

pub fn workout_insights(stats: &WorkoutStats, goal: Option<FitnessGoal>) -> Vec<String> {
    if stats.is_empty() {
        return placeholder("workout");
    }

    let mut insights = Vec::new();

    match stats.workouts_this_week {
        0 => insights.push("No workouts logged in the last 7 days".to_string()),
        n if n >= 4 => insights.push(format!("Excellent consistency: {} workouts this week", n)),
        n => insights.push(format!("{} workout(s) this week - good start", n)),
    }

    if stats.current_streak >= 3 {
        insights.push(format!(
            "You're on a {}-day workout streak!",
            stats.current_streak
        ));
    }

    if stats.workouts_per_week < 2.0 {
        insights.push(format!(
            "You average {:.1} workouts per week - aim for at least 3",
            stats.workouts_per_week
        ));
    }

    if let Some(exercise) = &stats.favorite_exercise {
        insights.push(format!("Your most logged exercise is {}", exercise));
    }

    match goal {
        Some(FitnessGoal::BuildMuscle) if stats.total_volume > 0.0 => insights.push(format!(
            "Total training volume: {:.0} kg across {} workouts",
            stats.total_volume, stats.total_workouts
        )),
        Some(FitnessGoal::LoseFat) if stats.workouts_per_week < 3.0 => insights.push(
            "More frequent sessions will support your fat-loss goal".to_string(),
        ),
        Some(FitnessGoal::ImproveEndurance) if stats.workouts_per_week >= 3.0 => insights.push(
            "Your training frequency supports endurance gains".to_string(),
        ),
        _ => {}
    }

    insights
}

pub fn nutrition_insights(stats: &NutritionStats) -> Vec<String> {
    if stats.is_empty() {
        return placeholder("nutrition");
    }

    let mut insights = Vec::new();

    match (&stats.targets, stats.calorie_progress) {
        (Some(targets), Some(progress)) => {
            if progress > 110.0 {
                insights.push(format!(
                    "You're above your {} kcal target today ({:.0}%)",
                    targets.calories, progress
                ));
            } else if progress >= 90.0 {
                insights.push(format!(
                    "Calories are on track: {:.0}% of your {} kcal target",
                    progress, targets.calories
                ));
            } else {
                insights.push(format!(
                    "You're below your calorie target today: {:.0} of {} kcal",
                    stats.today_calories, targets.calories
                ));
            }
        }
        _ => insights.push("Complete your profile to get personalized calorie targets".to_string()),
    }

    if let Some(protein) = stats.protein_progress {
        if protein >= 100.0 {
            insights.push("Protein target reached today".to_string());
        } else if protein < 80.0 {
            insights.push(format!(
                "Protein is low today: {:.0}g logged",
                stats.today_protein_g
            ));
        }
    }

    if stats.days_logged >= 5 {
        insights.push(format!(
            "Consistent logging: {} of the last 7 days",
            stats.days_logged
        ));
    }

    insights
}

pub fn hydration_insights(stats: &HydrationStats) -> Vec<String> {
    if stats.is_empty() {
        return placeholder("hydration");
    }

    let mut insights = Vec::new();

    if stats.today_progress >= 100.0 {
        insights.push(format!(
            "Excellent hydration! You reached {} ml today",
            stats.today_ml
        ));
    } else if stats.today_progress >= 80.0 {
        insights.push(format!(
            "Good hydration - you're close to your {} ml target",
            stats.daily_target_ml
        ));
    } else {
        insights.push(format!(
            "Increase your water intake: {} of {} ml today",
            stats.today_ml, stats.daily_target_ml
        ));
    }

    if stats.current_streak > 0 {
        insights.push(format!(
            "{}-day hydration streak",
            stats.current_streak
        ));
    }

    if stats.target_achievement > 80.0 {
        insights.push(format!(
            "You met your target on {:.0}% of logged days this week",
            stats.target_achievement
        ));
    }

    insights
}

pub fn recovery_insights(stats: &RecoveryStats) -> Vec<String> {
    if stats.is_empty() {
        return placeholder("recovery");
    }

    let mut insights = Vec::new();

    if stats.energy_entries > 0 {
        if stats.average_energy >= 7.0 {
            insights.push(format!(
                "Excellent energy levels (average {:.1}/10)",
                stats.average_energy
            ));
        } else if stats.average_energy >= 5.0 {
            insights.push(format!(
                "Good energy levels (average {:.1}/10)",
                stats.average_energy
            ));
        } else {
            insights.push(format!(
                "Energy is low (average {:.1}/10) - focus on recovery",
                stats.average_energy
            ));
        }
    }

    match stats.energy_trend {
        Trend::Improving => insights.push("Your energy is trending up this week".to_string()),
        Trend::Declining => {
            insights.push("Your energy is trending down - consider more rest".to_string())
        }
        Trend::Stable | Trend::InsufficientData => {}
    }

    match stats.today_energy {
        Some(level) if level < 4 => {
            insights.push(format!("Low energy today ({}/10)", level))
        }
        Some(level) if level > 7 => {
            insights.push(format!("High energy today ({}/10)", level))
        }
        _ => {}
    }

    if stats.pain_frequency > 30.0 {
        insights.push(format!(
            "Pain appears in {:.0}% of your entries - consult a healthcare provider",
            stats.pain_frequency
        ));
    } else if let Some(location) = &stats.most_common_pain_location {
        insights.push(format!(
            "Most reported pain area: {} - include targeted mobility work",
            location
        ));
    }

    insights
}

pub fn habit_insights(stats: &HabitStats) -> Vec<String> {
    if stats.is_empty() {
        return placeholder("habit");
    }

    let mut insights = Vec::new();

    if stats.average_completion_rate >= 80.0 {
        insights.push(format!(
            "Excellent habit consistency ({:.0}% this week)",
            stats.average_completion_rate
        ));
    } else if stats.average_completion_rate >= 60.0 {
        insights.push(format!(
            "Good habit consistency ({:.0}% this week)",
            stats.average_completion_rate
        ));
    } else if stats.average_completion_rate < 40.0 {
        insights.push(format!(
            "Habit completion is low ({:.0}%) - simplify to fewer habits",
            stats.average_completion_rate
        ));
    }

    let today = stats.today_completion_rate;
    if today >= 100.0 {
        insights.push("All habits completed today!".to_string());
    } else if today >= 70.0 {
        insights.push(format!(
            "Almost there: {} of {} habits done today",
            stats.today_completed, stats.active_habits
        ));
    } else if today >= 50.0 {
        insights.push("Halfway through today's habits".to_string());
    } else {
        insights.push(format!(
            "{} habit(s) still open today",
            stats.active_habits - stats.today_completed
        ));
    }

    if stats.best_streak >= 7 {
        insights.push(format!("Best current habit streak: {} days", stats.best_streak));
    }

    insights
}

pub fn schedule_insights(stats: &ScheduleStats) -> Vec<String> {
    if stats.is_empty() {
        return placeholder("schedule");
    }

    let mut insights = Vec::new();

    if stats.today_events > 0 {
        insights.push(format!("You have {} event(s) scheduled today", stats.today_events));
    }

    if let Some(next) = &stats.next_event {
        insights.push(format!(
            "Next up: {} at {}",
            next.title,
            next.starts_at.format("%a %H:%M")
        ));
    } else {
        insights.push("Nothing scheduled for the next 7 days".to_string());
    }

    if stats.scheduled_workouts_this_week == 0 {
        insights.push("No workouts scheduled this week".to_string());
    }

    if stats.conflicts > 0 {
        insights.push(format!(
            "{} scheduling conflict(s) - some events share a start time",
            stats.conflicts
        ));
    }

    insights
}
