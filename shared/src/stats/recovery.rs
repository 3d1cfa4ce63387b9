//! Recovery statistics from energy and pain readings

use super::{classify_trend, round1, Trend};
use crate::models::PainFatigueEntry;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Energy readings required before a trend is attempted
pub const MIN_TREND_ENTRIES: usize = 14;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecoveryStats {
    pub total_entries: usize,
    pub energy_entries: usize,
    pub pain_entries: usize,
    pub average_energy: f64,
    pub energy_trend: Trend,
    /// Pain readings as a percentage of all readings
    pub pain_frequency: f64,
    pub most_common_pain_location: Option<String>,
    pub average_pain_intensity: f64,
    /// Most recent energy level logged today
    pub today_energy: Option<u8>,
    /// Highest pain intensity logged today
    pub today_max_pain: Option<u8>,
}

impl RecoveryStats {
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }
}

pub fn calculate(entries: &[PainFatigueEntry], today: NaiveDate) -> RecoveryStats {
    if entries.is_empty() {
        return RecoveryStats::default();
    }

    let energy: Vec<(NaiveDate, Option<NaiveTime>, u8)> = entries
        .iter()
        .filter_map(|e| e.energy_level().map(|level| (e.date, e.time, level)))
        .collect();
    let pain: Vec<(NaiveDate, &str, u8)> = entries
        .iter()
        .filter_map(|e| e.pain().map(|(location, intensity)| (e.date, location, intensity)))
        .collect();

    let energy_levels: Vec<f64> = energy.iter().map(|(_, _, level)| *level as f64).collect();
    let pain_levels: Vec<f64> = pain.iter().map(|(_, _, intensity)| *intensity as f64).collect();

    let energy_trend = if energy.len() >= MIN_TREND_ENTRIES {
        let samples: Vec<(NaiveDate, f64)> = energy
            .iter()
            .map(|(date, _, level)| (*date, *level as f64))
            .collect();
        classify_trend(&samples, today)
    } else {
        Trend::InsufficientData
    };

    // Latest reading of the day; untimed entries sort before timed ones
    let today_energy = energy
        .iter()
        .filter(|(date, _, _)| *date == today)
        .max_by_key(|(_, time, _)| *time)
        .map(|(_, _, level)| *level);

    let today_max_pain = pain
        .iter()
        .filter(|(date, _, _)| *date == today)
        .map(|(_, _, intensity)| *intensity)
        .max();

    RecoveryStats {
        total_entries: entries.len(),
        energy_entries: energy.len(),
        pain_entries: pain.len(),
        average_energy: round1(super::mean(&energy_levels)),
        energy_trend,
        pain_frequency: round1(pain.len() as f64 / entries.len() as f64 * 100.0),
        most_common_pain_location: most_common_location(pain.iter().map(|(_, loc, _)| *loc)),
        average_pain_intensity: round1(super::mean(&pain_levels)),
        today_energy,
        today_max_pain,
    }
}

/// Most reported location, case-insensitive; ties go to the alphabetically first
fn most_common_location<'a, I>(locations: I) -> Option<String>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for location in locations {
        let key = location.trim().to_lowercase();
        if !key.is_empty() {
            *counts.entry(key).or_default() += 1;
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (location, count) in counts {
        if best.as_ref().map_or(true, |(_, best_count)| count > *best_count) {
            best = Some((location, count));
        }
    }
    best.map(|(location, _)| location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PainFatigueReading;
    use chrono::Duration;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn energy(days_ago: i64, level: u8) -> PainFatigueEntry {
        PainFatigueEntry {
            id: Uuid::new_v4(),
            date: today() - Duration::days(days_ago),
            time: None,
            reading: PainFatigueReading::Energy { level },
        }
    }

    fn pain(days_ago: i64, location: &str, intensity: u8) -> PainFatigueEntry {
        PainFatigueEntry {
            id: Uuid::new_v4(),
            date: today() - Duration::days(days_ago),
            time: None,
            reading: PainFatigueReading::Pain {
                location: location.to_string(),
                intensity,
                notes: None,
            },
        }
    }

    #[test]
    fn test_empty_recovery_is_zeroed() {
        let stats = calculate(&[], today());
        assert_eq!(stats, RecoveryStats::default());
        assert_eq!(stats.energy_trend, Trend::InsufficientData);
    }

    #[test]
    fn test_energy_trend_declining() {
        let mut entries: Vec<_> = (7..14).map(|d| energy(d, 8)).collect();
        entries.extend((0..7).map(|d| energy(d, 5)));
        let stats = calculate(&entries, today());
        assert_eq!(stats.energy_trend, Trend::Declining);
        assert_eq!(stats.average_energy, 6.5);
    }

    #[test]
    fn test_trend_requires_fourteen_readings() {
        let mut entries: Vec<_> = (7..13).map(|d| energy(d, 8)).collect();
        entries.extend((0..7).map(|d| energy(d, 2)));
        let stats = calculate(&entries, today());
        assert_eq!(stats.energy_entries, 13);
        assert_eq!(stats.energy_trend, Trend::InsufficientData);
    }

    #[test]
    fn test_pain_frequency_and_location() {
        let entries = vec![
            energy(0, 6),
            pain(0, "Knee", 7),
            pain(1, "knee ", 3),
            pain(2, "back", 5),
        ];
        let stats = calculate(&entries, today());
        assert_eq!(stats.pain_entries, 3);
        assert_eq!(stats.pain_frequency, 75.0);
        assert_eq!(stats.most_common_pain_location.as_deref(), Some("knee"));
        assert_eq!(stats.average_pain_intensity, 5.0);
        assert_eq!(stats.today_max_pain, Some(7));
        assert_eq!(stats.today_energy, Some(6));
    }

    #[test]
    fn test_today_energy_uses_latest_time() {
        let mut morning = energy(0, 3);
        morning.time = NaiveTime::from_hms_opt(7, 0, 0);
        let mut evening = energy(0, 8);
        evening.time = NaiveTime::from_hms_opt(19, 0, 0);
        let stats = calculate(&[evening, morning], today());
        assert_eq!(stats.today_energy, Some(8));
    }
}
