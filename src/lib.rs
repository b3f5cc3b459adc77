//! # oeetrack - equipment downtime and OEE analytics
//!
//! A command-line utility and library that turns equipment telemetry into
//! downtime statistics and Overall Equipment Effectiveness scores.
//!
//! ## Features
//!
//! - **Status Merging**: manual corrections override automatic sensor status
//! - **Midnight Splitting**: every interval is attributed to the days it covers
//! - **Downtime Aggregation**: occurrence counts per equipment, day and reason
//! - **OEE Scoring**: availability, performance and quality per equipment and
//!   day, rolled up into an overall score and category
//! - **Data Export**: CSV, JSON and Excel output
//!
//! ## Usage
//!
//! ```rust,no_run
//! use oeetrack::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod source;
