//! Error type shared by the analytics core and the interval sources.
//!
//! The core never lets a non-finite float escape: every zero denominator in
//! the OEE formulas surfaces as [`AnalyticsError::UndefinedMetric`] and the
//! caller's [`DivisionByZeroPolicy`](crate::libs::config::DivisionByZeroPolicy)
//! decides whether that aborts the calculation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Malformed timestamp '{value}' (expected YYYY/MM/DD HH:MM:SS)")]
    MalformedTimestamp { value: String },

    #[error("Malformed interval for equipment {equipment_id}: {reason}")]
    MalformedInterval { equipment_id: u32, reason: String },

    #[error("{metric} is undefined for equipment {equipment_id} on {date}: {reason}")]
    UndefinedMetric {
        metric: &'static str,
        equipment_id: u32,
        date: String,
        reason: &'static str,
    },

    #[error("Failed to read interval source {}: {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode interval source {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
