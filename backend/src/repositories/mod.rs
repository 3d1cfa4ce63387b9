//! Database repositories
//!
//! One repository per log domain. Every `list` takes an inclusive
//! [`DateRange`](fitness_coach_shared::DateRange) and returns rows for a
//! single user.

pub mod habits;
pub mod hydration;
pub mod log_store;
pub mod nutrition;
pub mod pain_fatigue;
pub mod profile;
pub mod schedule;
pub mod workout;

pub use habits::{HabitCompletionRecord, HabitCompletionRepository, HabitRecord, HabitRepository};
pub use hydration::{HydrationLogRecord, HydrationLogRepository};
pub use log_store::{AsyncLogStore, PgLogStore};
pub use nutrition::{NutritionLogRecord, NutritionLogRepository};
pub use pain_fatigue::{PainFatigueLogRecord, PainFatigueLogRepository};
pub use profile::{ProfileRecord, ProfileRepository};
pub use schedule::{ScheduledEventRecord, ScheduledEventRepository};
pub use workout::{WorkoutLogRecord, WorkoutLogRepository};
