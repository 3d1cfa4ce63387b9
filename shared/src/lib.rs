//! Fitness Coach Shared Library
//!
//! The aggregation core: log models, per-domain statistics, insight rules,
//! the recommendation engine and the report facade. Nothing here performs
//! I/O; the backend and WASM crates feed it already-loaded entries.

pub mod coach;
pub mod errors;
pub mod health_metrics;
pub mod insights;
pub mod models;
pub mod recommendations;
pub mod stats;
pub mod types;
pub mod validation;
pub mod workout_plan;

// Re-export commonly used items
pub use coach::{
    Coach, CoachMessage, CoachSettings, DomainStats, LogSnapshot, LogStore, ProfileProvider,
    Report, TodaySummary,
};
pub use errors::*;
pub use health_metrics::{macro_targets, MacroTargets};
pub use insights::DomainInsights;
pub use models::*;
pub use recommendations::{RecommendationEngine, MAX_RECOMMENDATIONS};
pub use stats::Trend;
pub use types::*;
pub use validation::{validate_entry, EntryRequest};
pub use workout_plan::{generate_workout, WorkoutPlan};
