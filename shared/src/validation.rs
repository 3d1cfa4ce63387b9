//! Write-boundary validation
//!
//! Request types derive `validator::Validate` for plain length and range
//! rules. The checks here cover what the derive cannot express. Entries that
//! pass are assumed valid everywhere downstream; the calculators never
//! re-check them.

use crate::errors::EntryError;
use crate::models::PainFatigueReading;
use crate::types::{
    CreateHabitRequest, LogHabitCompletionRequest, LogHydrationRequest, LogNutritionRequest,
    LogPainFatigueRequest, LogWorkoutRequest, ScheduleEventRequest, UpsertProfileRequest,
};
use validator::Validate;

/// Minimum habit name length after trimming
pub const MIN_HABIT_NAME_LEN: usize = 3;

/// Energy level bounds
pub const ENERGY_RANGE: std::ops::RangeInclusive<u8> = 0..=10;

/// Pain intensity bounds
pub const PAIN_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// A request that can be checked before it is stored
pub trait EntryRequest: Validate {
    /// Checks beyond the derived field rules
    fn check_shape(&self) -> Result<(), EntryError> {
        Ok(())
    }
}

/// Run derived field rules, then shape checks
pub fn validate_entry<T: EntryRequest>(request: &T) -> Result<(), EntryError> {
    request.validate()?;
    request.check_shape()
}

/// Validate energy level (0-10)
pub fn validate_energy_level(level: u8) -> Result<(), String> {
    if !ENERGY_RANGE.contains(&level) {
        return Err("Energy level must be between 0 and 10".to_string());
    }
    Ok(())
}

/// Validate pain intensity (1-10)
pub fn validate_pain_intensity(intensity: u8) -> Result<(), String> {
    if !PAIN_RANGE.contains(&intensity) {
        return Err("Pain intensity must be between 1 and 10".to_string());
    }
    Ok(())
}

/// Validate a habit name; surrounding whitespace does not count
pub fn validate_habit_name(name: &str) -> Result<(), String> {
    if name.trim().chars().count() < MIN_HABIT_NAME_LEN {
        return Err(format!(
            "Habit name must be at least {} characters",
            MIN_HABIT_NAME_LEN
        ));
    }
    Ok(())
}

pub fn validate_pain_fatigue(reading: &PainFatigueReading) -> Result<(), EntryError> {
    match reading {
        PainFatigueReading::Energy { level } => {
            validate_energy_level(*level).map_err(|m| EntryError::invalid("level", m))
        }
        PainFatigueReading::Pain {
            location,
            intensity,
            ..
        } => {
            if location.trim().is_empty() {
                return Err(EntryError::invalid("location", "Pain location is required"));
            }
            validate_pain_intensity(*intensity).map_err(|m| EntryError::invalid("intensity", m))
        }
    }
}

impl EntryRequest for UpsertProfileRequest {}

impl EntryRequest for LogWorkoutRequest {
    fn check_shape(&self) -> Result<(), EntryError> {
        if self.exercises.is_empty() {
            return Err(EntryError::invalid(
                "exercises",
                "A workout needs at least one exercise",
            ));
        }
        Ok(())
    }
}

impl EntryRequest for LogNutritionRequest {
    fn check_shape(&self) -> Result<(), EntryError> {
        if self.food_name.trim().is_empty() {
            return Err(EntryError::invalid("food_name", "Food name is required"));
        }
        Ok(())
    }
}

impl EntryRequest for LogHydrationRequest {}

impl EntryRequest for LogPainFatigueRequest {
    fn check_shape(&self) -> Result<(), EntryError> {
        validate_pain_fatigue(&self.reading)
    }
}

impl EntryRequest for CreateHabitRequest {
    fn check_shape(&self) -> Result<(), EntryError> {
        validate_habit_name(&self.name).map_err(|m| EntryError::invalid("name", m))
    }
}

impl EntryRequest for LogHabitCompletionRequest {}

impl EntryRequest for ScheduleEventRequest {
    fn check_shape(&self) -> Result<(), EntryError> {
        if self.title.trim().is_empty() {
            return Err(EntryError::invalid("title", "Title is required"));
        }
        Ok(())
    }
}
