use super::downtime::OccurrenceRecord;
use super::formatter::{format_ratio, FormattedEntry};
use super::interval::StatusInterval;
use super::oee::OeeResult;
use super::timestamp::CalendarDay;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn occurrences(occurrences: &[OccurrenceRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EQUIPMENT", "DATE", "STATUS", "REASON", "OCCURRENCES"]);
        for record in occurrences {
            table.add_row(row![
                record.equipment_id,
                record.date,
                record.status,
                record.reason,
                r->record.occurrence_count
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Daily ratios per equipment, followed by the overall averages.
    pub fn oee(result: &OeeResult) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EQUIPMENT", "DATE", "AVAILABILITY", "PERFORMANCE", "QUALITY"]);
        for equipment in &result.details.daily {
            for (day, availability) in &equipment.availability.daily {
                let performance = equipment.performance.daily.get(day).copied().unwrap_or_default();
                let quality = equipment.quality.daily.get(day).copied().unwrap_or_default();
                table.add_row(row![
                    equipment.equipment_id,
                    day,
                    r->format_ratio(*availability),
                    r->format_ratio(performance),
                    r->format_ratio(quality)
                ]);
            }
            table.add_row(row![
                equipment.equipment_id,
                "average",
                r->format_ratio(equipment.availability.average),
                r->format_ratio(equipment.performance.average),
                r->format_ratio(equipment.quality.average)
            ]);
        }

        let overall = &result.details.overall;
        table.add_row(row![
            "ALL",
            "overall",
            r->format_ratio(overall.availability),
            r->format_ratio(overall.performance),
            r->format_ratio(overall.quality)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn timeline(entries: &[StatusInterval], day: CalendarDay) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["START", "END", "STATUS", "REASON", "DURATION"]);
        for entry in entries.iter().map(|entry| FormattedEntry::new(entry, day)) {
            table.add_row(row![entry.start, entry.end, entry.status, entry.reason, entry.duration]);
        }
        table.printstd();

        Ok(())
    }
}
