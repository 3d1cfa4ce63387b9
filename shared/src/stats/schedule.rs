//! Schedule statistics

use super::WINDOW_DAYS;
use crate::models::ScheduledEvent;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Event type counted as a planned training session
pub const WORKOUT_EVENT_TYPE: &str = "workout";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    pub title: String,
    pub event_type: String,
    pub starts_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScheduleStats {
    pub total_events: usize,
    pub today_events: usize,
    /// Events from now through the next 7 days
    pub upcoming_events: usize,
    pub next_event: Option<UpcomingEvent>,
    pub scheduled_workouts_this_week: usize,
    /// Events sharing a start time with an earlier event (advisory only)
    pub conflicts: usize,
    pub events_by_type: BTreeMap<String, usize>,
}

impl ScheduleStats {
    pub fn is_empty(&self) -> bool {
        self.total_events == 0
    }
}

pub fn calculate(events: &[ScheduledEvent], now: NaiveDateTime) -> ScheduleStats {
    if events.is_empty() {
        return ScheduleStats::default();
    }

    let mut sorted: Vec<&ScheduledEvent> = events.iter().collect();
    sorted.sort_by(|a, b| a.starts_at().cmp(&b.starts_at()).then(a.title.cmp(&b.title)));

    let today = now.date();
    let horizon = today + Duration::days(WINDOW_DAYS);

    let upcoming: Vec<&ScheduledEvent> = sorted
        .iter()
        .copied()
        .filter(|e| e.starts_at() >= now && e.date <= horizon)
        .collect();

    let mut events_by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut starts: BTreeMap<NaiveDateTime, usize> = BTreeMap::new();
    for event in &sorted {
        *events_by_type.entry(event.event_type.to_lowercase()).or_default() += 1;
        *starts.entry(event.starts_at()).or_default() += 1;
    }

    ScheduleStats {
        total_events: events.len(),
        today_events: sorted.iter().filter(|e| e.date == today).count(),
        upcoming_events: upcoming.len(),
        next_event: upcoming.first().map(|e| UpcomingEvent {
            title: e.title.clone(),
            event_type: e.event_type.clone(),
            starts_at: e.starts_at(),
        }),
        scheduled_workouts_this_week: upcoming
            .iter()
            .filter(|e| e.event_type.eq_ignore_ascii_case(WORKOUT_EVENT_TYPE))
            .count(),
        conflicts: starts.values().map(|count| count - 1).sum(),
        events_by_type,
    }
}
