//! Fitness Coach WASM Module
//!
//! Browser bindings for the client-only mode, where logs live in local
//! storage. Everything crosses the boundary as JSON strings.

use chrono::NaiveDateTime;
use fitness_coach_shared::{
    generate_workout as plan_workout, macro_targets as profile_targets, Coach, CoachSettings,
    LogSnapshot, Profile,
};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

fn build_report_json(
    snapshot_json: &str,
    as_of: &str,
    hydration_target_ml: Option<u32>,
) -> Result<String, String> {
    let snapshot: LogSnapshot =
        serde_json::from_str(snapshot_json).map_err(|e| format!("Invalid snapshot: {}", e))?;
    let as_of: NaiveDateTime = as_of
        .parse()
        .map_err(|e| format!("Invalid as_of timestamp: {}", e))?;

    let mut settings = CoachSettings::default();
    if let Some(target) = hydration_target_ml {
        settings.hydration_target_ml = target;
    }

    // Local data has no account; the nil id marks it
    let report = Coach::new(settings).build_report(&snapshot, Uuid::nil(), as_of);
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

fn parse_profile(profile_json: &str) -> Result<Profile, String> {
    serde_json::from_str(profile_json).map_err(|e| format!("Invalid profile: {}", e))
}

/// Build the dashboard report from a JSON log snapshot
///
/// `as_of` is a local timestamp such as `2025-06-15T09:30:00`.
#[wasm_bindgen]
pub fn build_report(
    snapshot_json: &str,
    as_of: &str,
    hydration_target_ml: Option<u32>,
) -> Result<String, JsError> {
    build_report_json(snapshot_json, as_of, hydration_target_ml).map_err(|e| JsError::new(&e))
}

/// Calorie and macro targets for a JSON profile
#[wasm_bindgen]
pub fn macro_targets(profile_json: &str) -> Result<String, JsError> {
    parse_profile(profile_json)
        .and_then(|p| serde_json::to_string(&profile_targets(&p)).map_err(|e| e.to_string()))
        .map_err(|e| JsError::new(&e))
}

/// Suggested session for a JSON profile
#[wasm_bindgen]
pub fn generate_workout(profile_json: &str) -> Result<String, JsError> {
    parse_profile(profile_json)
        .and_then(|p| serde_json::to_string(&plan_workout(&p)).map_err(|e| e.to_string()))
        .map_err(|e| JsError::new(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{
        "age": 25,
        "weight_kg": 70.0,
        "height_cm": 175.0,
        "goal": "build-muscle",
        "experience": "beginner",
        "created_at": "2025-01-01"
    }"#;

    #[test]
    fn test_report_from_empty_snapshot() {
        let json = build_report_json("{}", "2025-06-15T09:30:00", None).unwrap();
        let report: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(report["coach_message"]["greeting"], "Good morning");
        assert_eq!(report["stats"]["hydration"]["daily_target_ml"], 2000);
        assert_eq!(report["insights"]["workout"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_report_with_profile_and_target() {
        let snapshot = format!(r#"{{"profile": {}}}"#, PROFILE);
        let json = build_report_json(&snapshot, "2025-06-15T18:00:00", Some(2500)).unwrap();
        let report: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(report["stats"]["hydration"]["daily_target_ml"], 2500);
        assert_eq!(report["stats"]["nutrition"]["targets"]["calories"], 2303);
        assert_eq!(report["stats"]["nutrition"]["calorie_progress"], serde_json::Value::Null);
        assert_eq!(report["coach_message"]["greeting"], "Good evening");
    }

    #[test]
    fn test_bad_input_is_reported() {
        assert!(build_report_json("not json", "2025-06-15T09:30:00", None).is_err());
        assert!(build_report_json("{}", "yesterday", None).is_err());
        assert!(parse_profile("{}").is_err());
    }

    #[test]
    fn test_profile_parses_for_targets() {
        let targets = profile_targets(&parse_profile(PROFILE).unwrap());
        assert_eq!(targets.calories, 2303);
    }
}
