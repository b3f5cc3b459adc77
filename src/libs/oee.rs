//! Overall Equipment Effectiveness (OEE) calculation.
//!
//! OEE scores how well equipment turned scheduled time into good output. It
//! is the product of three ratios computed per equipment per day from an
//! [`EligibleOeeRecord`]:
//!
//! ```text
//! Availability = (running + idle) / (running + idle + down)
//! Performance  = min(1, ideal cycle time / actual cycle time)
//!                ideal cycle  = planned_duration / planned_quantity
//!                actual cycle = effective_duration / actual_quantity
//! Quality      = (actual_quantity - defect_quantity) / actual_quantity
//! OEE          = Availability x Performance x Quality
//! ```
//!
//! Every ratio is rounded to two decimals. Daily values are averaged per
//! equipment, the per-equipment averages are averaged into an overall score,
//! and the overall OEE value is mapped to an [`OeeCategory`].
//!
//! ## Averaging
//!
//! [`AverageMode::Batch`] takes the exact mean of the full value set and
//! rounds once. [`AverageMode::Incremental`] reproduces the legacy running
//! mean, which re-rounds after every added value and can drift by a
//! hundredth over long series.
//!
//! ## Undefined ratios
//!
//! A zero denominator yields [`AnalyticsError::UndefinedMetric`]. The
//! configured [`DivisionByZeroPolicy`] either propagates it or records 0.0
//! for that day.

use crate::libs::config::{AnalyticsConfig, AverageMode, DivisionByZeroPolicy};
use crate::libs::eligibility::EligibleOeeRecord;
use crate::libs::error::{AnalyticsError, AnalyticsResult};
use crate::libs::interval::EquipmentId;
use crate::libs::timestamp::CalendarDay;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn undefined(metric: &'static str, record: &EligibleOeeRecord, reason: &'static str) -> AnalyticsError {
    AnalyticsError::UndefinedMetric {
        metric,
        equipment_id: record.equipment_id,
        date: record.date.to_string(),
        reason,
    }
}

/// Share of scheduled time the equipment was running or idle.
pub fn availability(record: &EligibleOeeRecord) -> AnalyticsResult<f64> {
    let uptime = record.running_duration + record.idle_duration;
    let scheduled = uptime + record.down_duration;
    if scheduled <= 0.0 {
        return Err(undefined("Availability", record, "no running, idle or down time"));
    }
    Ok(round2(uptime / scheduled))
}

/// Ideal cycle time over actual cycle time, capped at 1.
pub fn performance(record: &EligibleOeeRecord) -> AnalyticsResult<f64> {
    if record.planned_quantity == 0 {
        return Err(undefined("Performance", record, "planned quantity is zero"));
    }
    if record.actual_quantity == 0 {
        return Err(undefined("Performance", record, "actual quantity is zero"));
    }
    if record.effective_duration <= 0.0 {
        return Err(undefined("Performance", record, "effective duration is zero"));
    }

    let ideal_cycle = record.planned_duration / record.planned_quantity as f64;
    let actual_cycle = record.effective_duration / record.actual_quantity as f64;
    Ok(round2(ideal_cycle / actual_cycle).min(1.0))
}

/// Share of produced units that are not defective.
pub fn quality(record: &EligibleOeeRecord) -> AnalyticsResult<f64> {
    if record.actual_quantity == 0 {
        return Err(undefined("Quality", record, "actual quantity is zero"));
    }
    let good = record.actual_quantity.saturating_sub(record.defect_quantity);
    Ok(round2(good as f64 / record.actual_quantity as f64))
}

impl DivisionByZeroPolicy {
    /// Applies the policy to the outcome of a ratio calculation.
    pub fn resolve(&self, outcome: AnalyticsResult<f64>) -> AnalyticsResult<f64> {
        match (outcome, self) {
            (Err(error @ AnalyticsError::UndefinedMetric { .. }), DivisionByZeroPolicy::Zero) => {
                tracing::warn!(%error, "recording undefined metric as 0.0");
                Ok(0.0)
            }
            (outcome, _) => outcome,
        }
    }
}

impl AverageMode {
    /// Folds the `count`-th value into an average of the previous values.
    ///
    /// `total` is the sum including `value`.
    pub fn next_average(&self, previous: f64, value: f64, total: f64, count: usize) -> f64 {
        let n = count as f64;
        match self {
            AverageMode::Batch => round2(total / n),
            AverageMode::Incremental => round2((previous * (n - 1.0) + value) / n),
        }
    }
}

/// Daily values of one ratio for one equipment plus their average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub daily: BTreeMap<CalendarDay, f64>,
    pub average: f64,
}

impl MetricSeries {
    fn record(&mut self, day: CalendarDay, value: f64, mode: AverageMode) {
        self.daily.insert(day, value);
        let total: f64 = self.daily.values().sum();
        self.average = mode.next_average(self.average, value, total, self.daily.len());
    }
}

/// Availability, performance and quality of one equipment, by day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEquipmentOee {
    pub equipment_id: EquipmentId,
    pub availability: MetricSeries,
    pub performance: MetricSeries,
    pub quality: MetricSeries,
}

impl DailyEquipmentOee {
    fn new(equipment_id: EquipmentId) -> Self {
        Self {
            equipment_id,
            availability: MetricSeries::default(),
            performance: MetricSeries::default(),
            quality: MetricSeries::default(),
        }
    }
}

/// Running sum and average of one ratio across equipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTotal {
    pub total: f64,
    pub average: f64,
}

impl MetricTotal {
    fn accumulate(&mut self, value: f64, count: usize, mode: AverageMode) {
        self.total += value;
        self.average = mode.next_average(self.average, value, self.total, count);
    }
}

/// Overall ratios accumulated over every equipment's averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallOee {
    pub availability: MetricTotal,
    pub performance: MetricTotal,
    pub quality: MetricTotal,
}

impl OverallOee {
    /// OEE value of the overall averages, rounded to two decimals.
    pub fn value(&self) -> f64 {
        round2(self.availability.average * self.performance.average * self.quality.average)
    }

    pub fn summary(&self) -> OverallSummary {
        OverallSummary {
            availability: self.availability.average,
            performance: self.performance.average,
            quality: self.quality.average,
        }
    }
}

/// Qualitative band of an OEE value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OeeCategory {
    Excellent,
    Recommended,
    Good,
    Minimum,
    Bad,
    Uncategorized,
}

impl OeeCategory {
    /// Bands are closed at the top: 0.85 is `Recommended`, not `Excellent`.
    pub fn from_value(value: f64) -> Self {
        match value {
            v if v > 0.85 && v <= 1.0 => OeeCategory::Excellent,
            v if v > 0.75 && v <= 0.85 => OeeCategory::Recommended,
            v if v > 0.6 && v <= 0.75 => OeeCategory::Good,
            v if v > 0.5 && v <= 0.6 => OeeCategory::Minimum,
            v if (0.0..=0.5).contains(&v) => OeeCategory::Bad,
            _ => OeeCategory::Uncategorized,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OeeCategory::Excellent => {
                "The process runs with high efficiency, meeting or exceeding industry standards."
            }
            OeeCategory::Recommended => "Optimal performance, with minor improvements, can reach the best level",
            OeeCategory::Good => "The process runs well, but there are opportunities to improve efficiency",
            OeeCategory::Minimum => "Meets basic requirements but still requires significant improvements",
            OeeCategory::Bad => {
                "Performance is far below standard. A lot of time is lost due to breakdowns, downtime, or inefficiencies"
            }
            OeeCategory::Uncategorized => "-",
        }
    }
}

impl fmt::Display for OeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeClassification {
    pub value: f64,
    pub category: OeeCategory,
    pub description: String,
}

impl OeeClassification {
    pub fn of(value: f64) -> Self {
        let category = OeeCategory::from_value(value);
        Self {
            value,
            category,
            description: category.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeDetails {
    pub daily: Vec<DailyEquipmentOee>,
    pub overall: OverallSummary,
}

/// Classification plus the daily and overall figures behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeResult {
    pub classification: OeeClassification,
    pub details: OeeDetails,
}

/// Scores every eligibility record and groups the results by equipment.
///
/// Equipment appear in the order of their first record.
pub fn daily_equipment_oee(
    records: &[EligibleOeeRecord],
    settings: &AnalyticsConfig,
) -> AnalyticsResult<Vec<DailyEquipmentOee>> {
    let policy = settings.division_by_zero;
    let mode = settings.average_mode;
    let mut equipment: Vec<DailyEquipmentOee> = Vec::new();

    for record in records {
        let availability = policy.resolve(availability(record))?;
        let performance = policy.resolve(performance(record))?;
        let quality = policy.resolve(quality(record))?;

        let position = match equipment.iter().position(|e| e.equipment_id == record.equipment_id) {
            Some(position) => position,
            None => {
                equipment.push(DailyEquipmentOee::new(record.equipment_id));
                equipment.len() - 1
            }
        };

        let entry = &mut equipment[position];
        entry.availability.record(record.date, availability, mode);
        entry.performance.record(record.date, performance, mode);
        entry.quality.record(record.date, quality, mode);
    }

    Ok(equipment)
}

/// Averages per-equipment averages in processing order.
pub fn overall_oee(daily: &[DailyEquipmentOee], mode: AverageMode) -> OverallOee {
    daily.iter().enumerate().fold(OverallOee::default(), |mut overall, (idx, equipment)| {
        let count = idx + 1;
        overall.availability.accumulate(equipment.availability.average, count, mode);
        overall.performance.accumulate(equipment.performance.average, count, mode);
        overall.quality.accumulate(equipment.quality.average, count, mode);
        overall
    })
}

/// Full OEE calculation from eligibility records to classification.
pub fn calculate_oee(records: &[EligibleOeeRecord], settings: &AnalyticsConfig) -> AnalyticsResult<OeeResult> {
    let daily = daily_equipment_oee(records, settings)?;
    let overall = overall_oee(&daily, settings.average_mode);
    let classification = OeeClassification::of(overall.value());

    tracing::debug!(
        equipment = daily.len(),
        value = classification.value,
        category = %classification.category,
        "calculated OEE"
    );

    Ok(OeeResult {
        classification,
        details: OeeDetails {
            daily,
            overall: overall.summary(),
        },
    })
}
