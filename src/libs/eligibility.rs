//! Per-equipment, per-day accumulation of production and status data.
//!
//! An eligibility record exists for every (equipment, day) pair with at
//! least one production run. Planned and actual quantities of all runs that
//! day are summed, and the time the equipment spent in each status while a
//! run was in progress is added up, clipped to the run's window.
//!
//! ```text
//! run        |============ production ============|
//! status  |--RUNNING--|--IDLE--|---DOWN---|--RUNNING----|
//! counted    |RUNNING |--IDLE--|---DOWN---|RUNNING|
//! ```

use crate::libs::config::MidnightBoundary;
use crate::libs::interval::{DayBounded, EquipmentId, ProductionInterval, Status, StatusInterval};
use crate::libs::midnight::SplitAtMidnight;
use crate::libs::timestamp::CalendarDay;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Production and status totals of one equipment on one day.
///
/// Durations are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibleOeeRecord {
    pub equipment_id: EquipmentId,
    pub date: CalendarDay,
    pub planned_duration: f64,
    pub planned_quantity: u64,
    pub running_duration: f64,
    pub idle_duration: f64,
    pub down_duration: f64,
    pub offline_duration: f64,
    /// Running, idle and down time; everything except offline.
    pub effective_duration: f64,
    /// Time across all statuses.
    pub actual_duration: f64,
    pub actual_quantity: u64,
    pub defect_quantity: u64,
}

impl EligibleOeeRecord {
    fn seed(run: &ProductionInterval) -> Self {
        Self {
            equipment_id: run.equipment_id,
            date: run.day(),
            planned_duration: run.planned_duration_seconds as f64,
            planned_quantity: run.planned_quantity,
            running_duration: 0.0,
            idle_duration: 0.0,
            down_duration: 0.0,
            offline_duration: 0.0,
            effective_duration: 0.0,
            actual_duration: 0.0,
            actual_quantity: run.actual_quantity,
            defect_quantity: run.defect_quantity,
        }
    }

    fn absorb_run(&mut self, run: &ProductionInterval) {
        self.planned_duration += run.planned_duration_seconds as f64;
        self.planned_quantity += run.planned_quantity;
        self.actual_quantity += run.actual_quantity;
        self.defect_quantity += run.defect_quantity;
    }

    /// Adds `seconds` spent in `status` to the matching totals.
    pub fn add_status_time(&mut self, status: Status, seconds: f64) {
        match status {
            Status::Running => self.running_duration += seconds,
            Status::Idle => self.idle_duration += seconds,
            Status::Down => self.down_duration += seconds,
            Status::Offline => self.offline_duration += seconds,
        }
        self.actual_duration += seconds;
        if status != Status::Offline {
            self.effective_duration += seconds;
        }
    }
}

/// Seconds of `entry` that fall inside `run`, or `None` when they are disjoint.
///
/// Touching ranges intersect with zero length.
pub fn overlap_seconds(entry: &StatusInterval, run: &ProductionInterval) -> Option<f64> {
    if entry.end_time < run.start_production || entry.start_time > run.finish_production {
        return None;
    }
    let from = entry.start_time.max(run.start_production);
    let to = entry.end_time.min(run.finish_production);
    Some(from.seconds_until(to))
}

/// Joins midnight-split production runs with midnight-split status entries.
///
/// Records are returned in the order their (equipment, day) pair first
/// appears among the runs sorted by start. Zero-length run pieces left by a
/// run finishing at midnight carry no production time and are skipped.
pub fn build_eligibility(
    status: Vec<StatusInterval>,
    production: Vec<ProductionInterval>,
    boundary: MidnightBoundary,
) -> Vec<EligibleOeeRecord> {
    let status = status.split_at_midnight(boundary);
    let mut production = production.split_at_midnight(boundary);
    production.retain(|run| run.start_production < run.finish_production);

    let mut records: Vec<EligibleOeeRecord> = Vec::new();
    let mut index: HashMap<(EquipmentId, CalendarDay), usize> = HashMap::new();

    for run in &production {
        let key = (run.equipment_id, run.day());
        let position = match index.get(&key) {
            Some(&position) => {
                records[position].absorb_run(run);
                position
            }
            None => {
                records.push(EligibleOeeRecord::seed(run));
                index.insert(key, records.len() - 1);
                records.len() - 1
            }
        };

        let (equipment_id, date) = key;
        let record = &mut records[position];
        for entry in status
            .iter()
            .filter(|entry| entry.equipment_id == equipment_id && entry.day() == date)
        {
            if let Some(seconds) = overlap_seconds(entry, run) {
                record.add_status_time(entry.status, seconds);
            }
        }
    }

    tracing::debug!(
        runs = production.len(),
        status_entries = status.len(),
        records = records.len(),
        "built eligibility records"
    );
    records
}
