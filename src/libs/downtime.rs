//! Downtime extraction and occurrence aggregation.

use crate::libs::interval::{DayBounded, EquipmentId, Status, StatusInterval};
use crate::libs::timestamp::CalendarDay;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reason recorded for down entries that carry none.
pub const DEFAULT_DOWN_REASON: &str = "Status Down";

/// Number of entries sharing equipment, day, status and reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    pub equipment_id: EquipmentId,
    pub date: CalendarDay,
    pub status: Status,
    pub reason: String,
    pub occurrence_count: usize,
}

/// Keeps `DOWN` entries only, filling empty reasons with `fallback_reason`.
pub fn downtime_entries(timeline: &[StatusInterval], fallback_reason: &str) -> Vec<StatusInterval> {
    timeline
        .iter()
        .filter(|entry| entry.status == Status::Down)
        .map(|entry| StatusInterval {
            reason: if entry.reason.is_empty() {
                fallback_reason.to_string()
            } else {
                entry.reason.clone()
            },
            ..entry.clone()
        })
        .collect()
}

/// Counts entries per (equipment, day of start, status, reason).
///
/// Output is ordered by equipment, then day ascending, then count
/// descending. Groups with equal counts keep the order in which they were
/// first seen.
pub fn aggregate_occurrences(entries: &[StatusInterval]) -> Vec<OccurrenceRecord> {
    let mut occurrences: Vec<OccurrenceRecord> = Vec::new();
    let mut index: HashMap<(EquipmentId, CalendarDay, Status, &str), usize> = HashMap::new();

    for entry in entries {
        let key = (entry.equipment_id, entry.day(), entry.status, entry.reason.as_str());
        match index.get(&key) {
            Some(&position) => occurrences[position].occurrence_count += 1,
            None => {
                index.insert(key, occurrences.len());
                occurrences.push(OccurrenceRecord {
                    equipment_id: entry.equipment_id,
                    date: entry.day(),
                    status: entry.status,
                    reason: entry.reason.clone(),
                    occurrence_count: 1,
                });
            }
        }
    }

    occurrences.sort_by(|a, b| {
        a.equipment_id
            .cmp(&b.equipment_id)
            .then(a.date.cmp(&b.date))
            .then(b.occurrence_count.cmp(&a.occurrence_count))
    });
    occurrences
}
