//! Core library modules for oeetrack.
//!
//! ## Features
//!
//! - **Interval Model**: timestamps, calendar days, status and production records
//! - **Pipeline**: midnight splitting, status merging, downtime aggregation,
//!   OEE eligibility and OEE scoring
//! - **Use Cases**: [`analytics::DeviceAnalytics`] wiring an interval source to the pipeline
//! - **Infrastructure**: configuration, data storage, messages, logging, errors
//! - **User Interface**: console tables, formatting, data export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use oeetrack::libs::analytics::DeviceAnalytics;
//! use oeetrack::libs::config::{AnalyticsConfig, SourceConfig};
//! use oeetrack::source::JsonFixtures;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let analytics = DeviceAnalytics::new(JsonFixtures::new(SourceConfig::default()), AnalyticsConfig::default());
//! let result = analytics.oee_calculation().await?;
//! println!("{} ({})", result.classification.value, result.classification.category);
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod config;
pub mod data_storage;
pub mod downtime;
pub mod eligibility;
pub mod error;
pub mod export;
pub mod formatter;
pub mod interval;
pub mod logging;
pub mod merge;
pub mod messages;
pub mod midnight;
pub mod oee;
pub mod timestamp;
pub mod view;
