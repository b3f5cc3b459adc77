//! Status and production interval records.
//!
//! Both record kinds are read once from an interval source and then
//! transformed by value through the pipeline: the splitter, the merger and
//! the eligibility builder all produce new records instead of mutating the
//! inputs they were handed.

use crate::libs::error::{AnalyticsError, AnalyticsResult};
use crate::libs::timestamp::{CalendarDay, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub type EquipmentId = u32;

/// Operating state reported for a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Running,
    Idle,
    Down,
    Offline,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "RUNNING",
            Status::Idle => "IDLE",
            Status::Down => "DOWN",
            Status::Offline => "OFFLINE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A span of time during which equipment held a single status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusInterval {
    pub equipment_id: EquipmentId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reason: String,
}

impl StatusInterval {
    pub fn new(equipment_id: EquipmentId, start_time: Timestamp, end_time: Timestamp, status: Status, reason: &str) -> Self {
        Self {
            equipment_id,
            start_time,
            end_time,
            status,
            reason: reason.to_string(),
        }
    }

    /// Rejects records that do not end after they start.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.end_time <= self.start_time {
            return Err(AnalyticsError::MalformedInterval {
                equipment_id: self.equipment_id,
                reason: format!(
                    "status interval must end after it starts ({} -> {})",
                    self.start_time, self.end_time
                ),
            });
        }
        Ok(())
    }

    pub fn duration_seconds(&self) -> f64 {
        self.start_time.seconds_until(self.end_time)
    }
}

/// A production run with its planned and actual output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionInterval {
    pub equipment_id: EquipmentId,
    pub start_production: Timestamp,
    pub finish_production: Timestamp,
    #[serde(rename = "planned_duration_in_second", alias = "planned_duration_seconds")]
    pub planned_duration_seconds: u64,
    pub planned_quantity: u64,
    pub actual_quantity: u64,
    pub defect_quantity: u64,
}

impl ProductionInterval {
    /// Rejects empty or inverted runs and runs reporting more defects than
    /// output.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.finish_production <= self.start_production {
            return Err(AnalyticsError::MalformedInterval {
                equipment_id: self.equipment_id,
                reason: format!(
                    "production run must finish after it starts ({} -> {})",
                    self.start_production, self.finish_production
                ),
            });
        }
        if self.defect_quantity > self.actual_quantity {
            return Err(AnalyticsError::MalformedInterval {
                equipment_id: self.equipment_id,
                reason: format!(
                    "defect quantity {} exceeds actual quantity {}",
                    self.defect_quantity, self.actual_quantity
                ),
            });
        }
        Ok(())
    }
}

/// Anything with an opening and closing instant that can be cut at day
/// boundaries while keeping every other field.
pub trait DayBounded: Clone {
    fn opened_at(&self) -> Timestamp;
    fn closed_at(&self) -> Timestamp;
    fn with_bounds(&self, opened_at: Timestamp, closed_at: Timestamp) -> Self;

    /// Calendar day the record is attributed to (the day of its start).
    fn day(&self) -> CalendarDay {
        self.opened_at().day()
    }
}

impl DayBounded for StatusInterval {
    fn opened_at(&self) -> Timestamp {
        self.start_time
    }

    fn closed_at(&self) -> Timestamp {
        self.end_time
    }

    fn with_bounds(&self, opened_at: Timestamp, closed_at: Timestamp) -> Self {
        Self {
            start_time: opened_at,
            end_time: closed_at,
            ..self.clone()
        }
    }
}

impl DayBounded for ProductionInterval {
    fn opened_at(&self) -> Timestamp {
        self.start_production
    }

    fn closed_at(&self) -> Timestamp {
        self.finish_production
    }

    fn with_bounds(&self, opened_at: Timestamp, closed_at: Timestamp) -> Self {
        Self {
            start_production: opened_at,
            finish_production: closed_at,
            ..self.clone()
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
