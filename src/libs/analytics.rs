//! Device analytics use cases.
//!
//! [`DeviceAnalytics`] pulls raw collections from an [`IntervalSource`] and
//! runs them through the pipeline:
//!
//! ```text
//! source ─┬─ automatic ─┐
//!         ├─ manual ────┴─ merge ── downtime filter ── occurrences
//!         └─ production ─── eligibility (automatic or merged) ── OEE
//! ```
//!
//! Every call reloads the source, and nothing is cached between calls.

use crate::libs::config::{AnalyticsConfig, StatusSource};
use crate::libs::downtime::{aggregate_occurrences, downtime_entries, OccurrenceRecord};
use crate::libs::eligibility::build_eligibility;
use crate::libs::error::AnalyticsResult;
use crate::libs::interval::{DayBounded, EquipmentId, StatusInterval};
use crate::libs::merge::merge_status;
use crate::libs::messages::Message;
use crate::libs::midnight::SplitAtMidnight;
use crate::libs::oee::{calculate_oee, OeeResult};
use crate::libs::timestamp::CalendarDay;
use crate::source::{IntervalSource, SourceData};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which status collection a timeline query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStream {
    Automatic,
    Manual,
    #[default]
    Merged,
}

impl fmt::Display for TimelineStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TimelineStream::Automatic => "automatic",
            TimelineStream::Manual => "manual",
            TimelineStream::Merged => "merged",
        };
        write!(f, "{}", name)
    }
}

/// JSON response shape shared by every machine-readable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(message: Message, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

pub struct DeviceAnalytics<S: IntervalSource> {
    source: S,
    settings: AnalyticsConfig,
}

impl<S: IntervalSource> DeviceAnalytics<S> {
    pub fn new(source: S, settings: AnalyticsConfig) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &AnalyticsConfig {
        &self.settings
    }

    pub async fn load(&self) -> AnalyticsResult<SourceData> {
        self.source.load().await
    }

    /// Occurrence counts of downtime per equipment, day and reason.
    ///
    /// With `equipment` set, only that equipment's occurrences are returned.
    pub async fn downtime_aggregate(&self, equipment: Option<EquipmentId>) -> AnalyticsResult<Vec<OccurrenceRecord>> {
        let data = self.load().await?;
        Ok(self.downtime_of(data, equipment))
    }

    /// OEE classification with the daily and overall ratios behind it.
    pub async fn oee_calculation(&self) -> AnalyticsResult<OeeResult> {
        let data = self.load().await?;
        self.oee_of(data)
    }

    /// Entries of one stream for one equipment on one day, split at midnight
    /// and ordered by start.
    pub async fn timeline(
        &self,
        equipment_id: EquipmentId,
        day: CalendarDay,
        stream: TimelineStream,
    ) -> AnalyticsResult<Vec<StatusInterval>> {
        let data = self.load().await?;
        let entries = match stream {
            TimelineStream::Automatic => data.status.split_at_midnight(self.settings.midnight_boundary),
            TimelineStream::Manual => data.manual_status.split_at_midnight(self.settings.midnight_boundary),
            TimelineStream::Merged => self.merged(data.status, data.manual_status),
        };

        Ok(entries
            .into_iter()
            .filter(|entry| entry.equipment_id == equipment_id && entry.day() == day)
            .collect())
    }

    fn merged(&self, automatic: Vec<StatusInterval>, manual: Vec<StatusInterval>) -> Vec<StatusInterval> {
        merge_status(
            automatic,
            manual,
            self.settings.overlap_resolution,
            self.settings.midnight_boundary,
        )
    }

    fn downtime_of(&self, data: SourceData, equipment: Option<EquipmentId>) -> Vec<OccurrenceRecord> {
        let merged = self.merged(data.status, data.manual_status);
        let mut down = downtime_entries(&merged, &self.settings.downtime_reason_fallback);
        if let Some(equipment_id) = equipment {
            down.retain(|entry| entry.equipment_id == equipment_id);
        }

        let occurrences = aggregate_occurrences(&down);
        tracing::debug!(
            timeline = merged.len(),
            downtime = down.len(),
            groups = occurrences.len(),
            "aggregated downtime"
        );
        occurrences
    }

    fn oee_of(&self, data: SourceData) -> AnalyticsResult<OeeResult> {
        let status = match self.settings.oee_status_source {
            StatusSource::Automatic => data.status,
            StatusSource::Merged => self.merged(data.status, data.manual_status),
        };
        let records = build_eligibility(status, data.production, self.settings.midnight_boundary);
        calculate_oee(&records, &self.settings)
    }

    /// Downtime and OEE from a single load of the source.
    pub async fn report(&self) -> AnalyticsResult<(Vec<OccurrenceRecord>, OeeResult)> {
        let data = self.load().await?;
        let downtime = self.downtime_of(data.clone(), None);
        let oee = self.oee_of(data)?;
        Ok((downtime, oee))
    }
}
