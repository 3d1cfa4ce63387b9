//! Business logic services
//!
//! Services validate input, coordinate repositories and map failures to
//! [`ApiError`](crate::error::ApiError).

pub mod habits;
pub mod logs;
pub mod profile;
pub mod report;

pub use habits::HabitService;
pub use logs::LogService;
pub use profile::ProfileService;
pub use report::{DomainStatsView, ReportService, StatsDomain};
