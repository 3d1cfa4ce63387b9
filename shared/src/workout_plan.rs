//! Rule-based workout generation
//!
//! Exercises come from a per-goal table, volume is scaled by experience and
//! movements that load an injured area (from the free-text medical notes) are
//! swapped for low-impact alternatives.

use crate::models::{ExperienceLevel, FitnessGoal, Profile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub name: String,
    pub sets: u32,
    /// Reps, or seconds for timed movements
    pub reps: u32,
    pub rest_seconds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub title: String,
    pub goal: Option<FitnessGoal>,
    pub experience: ExperienceLevel,
    pub exercises: Vec<PlannedExercise>,
    pub estimated_minutes: u32,
}

/// Injury keyword, the exercises it rules out, and the replacement
const MEDICAL_SUBSTITUTIONS: &[(&str, &[&str], &str)] = &[
    ("knee", &["Squat", "Lunge", "Jump Rope", "Box Jump"], "Glute Bridge"),
    ("back", &["Deadlift", "Bent-over Row", "Kettlebell Swing"], "Bird Dog"),
    ("shoulder", &["Overhead Press", "Push-up", "Bench Press"], "Band Pull-apart"),
];

fn exercise_table(goal: Option<FitnessGoal>) -> &'static [&'static str] {
    match goal {
        Some(FitnessGoal::BuildMuscle) => &[
            "Squat",
            "Bench Press",
            "Bent-over Row",
            "Overhead Press",
            "Deadlift",
        ],
        Some(FitnessGoal::LoseFat) => &[
            "Kettlebell Swing",
            "Lunge",
            "Push-up",
            "Mountain Climber",
            "Jump Rope",
        ],
        Some(FitnessGoal::ImproveEndurance) => &[
            "Jump Rope",
            "Box Jump",
            "Burpee",
            "Plank",
            "Mountain Climber",
        ],
        None => &["Squat", "Push-up", "Plank", "Glute Bridge"],
    }
}

/// (sets, reps, rest seconds) for a goal and experience level
fn prescription(goal: Option<FitnessGoal>, experience: ExperienceLevel) -> (u32, u32, u32) {
    let (sets, reps, rest) = match goal {
        Some(FitnessGoal::BuildMuscle) => (3, 10, 90),
        Some(FitnessGoal::LoseFat) => (3, 15, 45),
        Some(FitnessGoal::ImproveEndurance) => (3, 20, 30),
        None => (2, 12, 60),
    };
    match experience {
        ExperienceLevel::Beginner => (sets, reps, rest),
        ExperienceLevel::Intermediate => (sets + 1, reps, rest),
        ExperienceLevel::Advanced => (sets + 2, reps, rest.saturating_sub(15).max(30)),
    }
}

/// Build a session for the profile
pub fn generate_workout(profile: &Profile) -> WorkoutPlan {
    let medical = profile.medical.to_lowercase();
    let (sets, reps, rest_seconds) = prescription(profile.goal, profile.experience);

    let mut exercises: Vec<PlannedExercise> = Vec::new();
    for name in exercise_table(profile.goal) {
        let substitution = MEDICAL_SUBSTITUTIONS
            .iter()
            .find(|(keyword, blocked, _)| medical.contains(keyword) && blocked.contains(name));

        let planned = match substitution {
            Some((keyword, _, replacement)) => PlannedExercise {
                name: replacement.to_string(),
                sets,
                reps,
                rest_seconds,
                note: Some(format!("Replaces {} because of {} notes", name, keyword)),
            },
            None => PlannedExercise {
                name: name.to_string(),
                sets,
                reps,
                rest_seconds,
                note: None,
            },
        };

        if !exercises.iter().any(|e| e.name == planned.name) {
            exercises.push(planned);
        }
    }

    // ~40 s per set plus rest, rounded up to whole minutes
    let total_seconds: u32 = exercises
        .iter()
        .map(|e| e.sets * (40 + e.rest_seconds))
        .sum();

    WorkoutPlan {
        title: match profile.goal {
            Some(FitnessGoal::BuildMuscle) => "Strength & Hypertrophy",
            Some(FitnessGoal::LoseFat) => "Fat-Burning Circuit",
            Some(FitnessGoal::ImproveEndurance) => "Endurance Conditioning",
            None => "Full-Body Basics",
        }
        .to_string(),
        goal: profile.goal,
        experience: profile.experience,
        exercises,
        estimated_minutes: total_seconds.div_ceil(60),
    }
}
