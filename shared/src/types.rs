//! API request and response types

use crate::models::{ExperienceLevel, FitnessGoal, PainFatigueReading};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[validate(range(min = 13, max = 120))]
    pub age: u32,
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight_kg: f64,
    #[validate(range(min = 50.0, max = 300.0))]
    pub height_cm: f64,
    #[serde(default)]
    pub goal: Option<FitnessGoal>,
    #[serde(default)]
    pub experience: ExperienceLevel,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub medical: String,
}

// ============================================================================
// Log entries
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExerciseInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub sets: u32,
    #[validate(range(min = 1, max = 1000))]
    pub reps: u32,
    /// Kilograms; 0 for bodyweight
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogWorkoutRequest {
    pub date: NaiveDate,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(nested)]
    pub exercises: Vec<ExerciseInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogNutritionRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[validate(length(min = 1, max = 200))]
    pub food_name: String,
    #[validate(range(min = 0.0, max = 10000.0))]
    pub calories: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub protein_g: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub carbs_g: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub fat_g: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogHydrationRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[validate(range(min = 1, max = 5000))]
    pub amount_ml: u32,
}

/// Energy or pain reading; ranges are checked by
/// [`validate_pain_fatigue`](crate::validation::validate_pain_fatigue)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogPainFatigueRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(flatten)]
    pub reading: PainFatigueReading,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHabitRequest {
    #[validate(length(max = 100))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogHabitCompletionRequest {
    pub date: NaiveDate,
    #[serde(default = "default_completed")]
    pub completed: bool,
}

fn default_completed() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleEventRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub event_type: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}
