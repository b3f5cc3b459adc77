//! Export of analytics results to CSV, JSON and Excel.
//!
//! ## Data Types
//!
//! - **downtime**: occurrence counts per equipment, day and reason
//! - **oee**: daily ratios per equipment plus the overall classification
//! - **all**: both; one combined document for JSON, two sibling files
//!   (`<name>_downtime.<ext>`, `<name>_oee.<ext>`) for CSV and Excel
//!
//! Without an explicit output path the file is named
//! `oeetrack_export_YYYYMMDD_HHMMSS.<ext>` in the working directory.

use crate::{
    libs::{
        analytics::DeviceAnalytics,
        downtime::OccurrenceRecord,
        messages::Message,
        oee::{OeeCategory, OeeResult},
    },
    msg_error_anyhow, msg_info, msg_success,
    source::IntervalSource,
};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    Downtime,
    Oee,
    All,
}

/// One row of daily OEE ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOeeRow {
    pub equipment_id: u32,
    pub date: String,
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
}

/// Flattened OEE result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOee {
    pub value: f64,
    pub category: OeeCategory,
    pub description: String,
    pub overall_availability: f64,
    pub overall_performance: f64,
    pub overall_quality: f64,
    pub daily: Vec<ExportOeeRow>,
}

impl From<&OeeResult> for ExportOee {
    fn from(result: &OeeResult) -> Self {
        let daily = result
            .details
            .daily
            .iter()
            .flat_map(|equipment| {
                equipment.availability.daily.iter().map(move |(day, availability)| ExportOeeRow {
                    equipment_id: equipment.equipment_id,
                    date: day.to_string(),
                    availability: *availability,
                    performance: equipment.performance.daily.get(day).copied().unwrap_or_default(),
                    quality: equipment.quality.daily.get(day).copied().unwrap_or_default(),
                })
            })
            .collect();

        Self {
            value: result.classification.value,
            category: result.classification.category,
            description: result.classification.description.clone(),
            overall_availability: result.details.overall.availability,
            overall_performance: result.details.overall.performance,
            overall_quality: result.details.overall.quality,
            daily,
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("oeetrack_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Runs the analytics needed for `data_type` and writes the result.
    pub async fn export<S: IntervalSource>(&self, data_type: ExportData, analytics: &DeviceAnalytics<S>) -> Result<()> {
        match data_type {
            ExportData::Downtime => {
                msg_info!(Message::ExportingData("downtime".to_string()));
                let occurrences = analytics.downtime_aggregate(None).await?;
                self.write_downtime(&occurrences)
            }
            ExportData::Oee => {
                msg_info!(Message::ExportingData("OEE".to_string()));
                let result = analytics.oee_calculation().await?;
                self.write_oee(&ExportOee::from(&result))
            }
            ExportData::All => {
                msg_info!(Message::ExportingAllData);
                let (occurrences, result) = analytics.report().await?;
                self.write_all(&occurrences, &ExportOee::from(&result))
            }
        }
    }

    fn write_downtime(&self, occurrences: &[OccurrenceRecord]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_downtime_csv(occurrences)?,
            ExportFormat::Json => self.write_json(&occurrences)?,
            ExportFormat::Excel => self.export_downtime_excel(occurrences)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_oee(&self, oee: &ExportOee) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_oee_csv(oee)?,
            ExportFormat::Json => self.write_json(oee)?,
            ExportFormat::Excel => self.export_oee_excel(oee)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_all(&self, occurrences: &[OccurrenceRecord], oee: &ExportOee) -> Result<()> {
        if let ExportFormat::Json = self.format {
            let all_data = serde_json::json!({
                "export_date": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                "downtime": occurrences,
                "oee": oee,
            });
            self.write_json(&all_data)?;
            msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
            return Ok(());
        }

        let base = self
            .output_path
            .file_stem()
            .ok_or_else(|| msg_error_anyhow!(Message::OperationFailed("export path has no file name".to_string())))?
            .to_string_lossy();
        let ext = self
            .output_path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_else(|| match self.format {
                ExportFormat::Excel => "xlsx".to_string(),
                _ => "csv".to_string(),
            });

        let downtime_path = self.output_path.with_file_name(format!("{}_downtime.{}", base, ext));
        let oee_path = self.output_path.with_file_name(format!("{}_oee.{}", base, ext));

        Exporter::new(self.format, Some(downtime_path)).write_downtime(occurrences)?;
        Exporter::new(self.format, Some(oee_path)).write_oee(oee)?;
        Ok(())
    }

    fn write_json<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_downtime_csv(&self, occurrences: &[OccurrenceRecord]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(&["Equipment", "Date", "Status", "Reason", "Occurrences"])?;

        for record in occurrences {
            wtr.write_record([
                record.equipment_id.to_string(),
                record.date.to_string(),
                record.status.to_string(),
                record.reason.clone(),
                record.occurrence_count.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_oee_csv(&self, oee: &ExportOee) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(&["DAILY RATIOS", "", "", "", ""])?;
        wtr.write_record(&["Equipment", "Date", "Availability", "Performance", "Quality"])?;
        for row in &oee.daily {
            wtr.write_record([
                row.equipment_id.to_string(),
                row.date.clone(),
                format!("{:.2}", row.availability),
                format!("{:.2}", row.performance),
                format!("{:.2}", row.quality),
            ])?;
        }

        wtr.write_record(&["", "", "", "", ""])?;
        wtr.write_record(&["OVERALL", "", "", "", ""])?;
        wtr.write_record(&["Availability", &format!("{:.2}", oee.overall_availability), "", "", ""])?;
        wtr.write_record(&["Performance", &format!("{:.2}", oee.overall_performance), "", "", ""])?;
        wtr.write_record(&["Quality", &format!("{:.2}", oee.overall_quality), "", "", ""])?;
        wtr.write_record(&["OEE", &format!("{:.2}", oee.value), "", "", ""])?;
        wtr.write_record(&["Category", &oee.category.to_string(), "", "", ""])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_downtime_excel(&self, occurrences: &[OccurrenceRecord]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = header_format();
        write_header(worksheet, 0, &["Equipment", "Date", "Status", "Reason", "Occurrences"], &header_format)?;

        for (i, record) in occurrences.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_number(row, 0, record.equipment_id as f64)?;
            worksheet.write_string(row, 1, record.date.to_string())?;
            worksheet.write_string(row, 2, record.status.as_str())?;
            worksheet.write_string(row, 3, &record.reason)?;
            worksheet.write_number(row, 4, record.occurrence_count as f64)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_oee_excel(&self, oee: &ExportOee) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = header_format();
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, format!("OEE {:.2} - {}", oee.value, oee.category), &title_format)?;
        worksheet.write_string(1, 0, &oee.description)?;

        write_header(worksheet, 3, &["Equipment", "Date", "Availability", "Performance", "Quality"], &header_format)?;
        let mut row = 4;
        for daily in &oee.daily {
            worksheet.write_number(row, 0, daily.equipment_id as f64)?;
            worksheet.write_string(row, 1, &daily.date)?;
            worksheet.write_number(row, 2, daily.availability)?;
            worksheet.write_number(row, 3, daily.performance)?;
            worksheet.write_number(row, 4, daily.quality)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "OVERALL", &header_format)?;
        for (label, value) in [
            ("Availability", oee.overall_availability),
            ("Performance", oee.overall_performance),
            ("Quality", oee.overall_quality),
        ] {
            row += 1;
            worksheet.write_string(row, 0, label)?;
            worksheet.write_number(row, 1, value)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn header_format() -> Format {
    Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray)
}

fn write_header(worksheet: &mut Worksheet, row: u32, titles: &[&str], format: &Format) -> Result<()> {
    for (col, title) in titles.iter().enumerate() {
        worksheet.write_string_with_format(row, col as u16, *title, format)?;
    }
    Ok(())
}
