//! Text formatting for durations and ratios shown in tables and exports.

use crate::libs::interval::StatusInterval;
use crate::libs::timestamp::CalendarDay;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A status entry rendered for display on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedEntry {
    pub start: String,
    pub end: String,
    pub status: String,
    pub reason: String,
    pub duration: String,
}

impl FormattedEntry {
    /// Clock times are relative to `day`, so a piece closing at midnight shows
    /// `24:00:00`.
    pub fn new(entry: &StatusInterval, day: CalendarDay) -> Self {
        Self {
            start: entry.start_time.clock_on(day),
            end: entry.end_time.clock_on(day),
            status: entry.status.to_string(),
            reason: entry.reason.clone(),
            duration: format_seconds(entry.duration_seconds()),
        }
    }
}

/// Formats a duration as `HH:MM:SS`. Negative durations render as zero.
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

pub fn format_seconds(seconds: f64) -> String {
    format_duration(&Duration::seconds(seconds.round() as i64))
}

/// Formats a 0..1 ratio as a whole percentage, e.g. `0.83` as `83%`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}
