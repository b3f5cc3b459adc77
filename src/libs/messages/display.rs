use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file deleted".to_string(),
            Message::ConfigNotFound => "No configuration file found, nothing to delete".to_string(),
            Message::ConfigModuleSource => "Interval sources".to_string(),
            Message::ConfigModuleAnalytics => "Analytics settings".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptStatusPath => "Automatic status file".to_string(),
            Message::PromptManualStatusPath => "Manual status file".to_string(),
            Message::PromptProductionPath => "Production file".to_string(),
            Message::PromptMidnightBoundary => "Intervals ending at midnight".to_string(),
            Message::PromptOverlapResolution => "Manual overlap resolution".to_string(),
            Message::PromptAverageMode => "Averaging mode".to_string(),
            Message::PromptDivisionByZero => "On undefined ratio".to_string(),
            Message::PromptOeeStatusSource => "Status stream used for OEE".to_string(),
            Message::PromptDowntimeReasonFallback => "Reason for unexplained downtime".to_string(),

            // === DOWNTIME MESSAGES ===
            Message::DowntimeHeader => "Downtime occurrences".to_string(),
            Message::DowntimeHeaderForEquipment(id) => format!("Downtime occurrences for equipment {}", id),
            Message::NoDowntimeFound => "No downtime found".to_string(),
            Message::DowntimeRetrieved => "Devices downtime data retrieved successfully".to_string(),

            // === OEE MESSAGES ===
            Message::OeeHeader => "Overall Equipment Effectiveness".to_string(),
            Message::OeeDailyHeader => "Daily ratios per equipment".to_string(),
            Message::OeeClassification { value, category } => format!("OEE {} ({})", value, category),
            Message::NoEligibleRecords => "No production runs found, OEE defaults to 0".to_string(),
            Message::OeeRetrieved => "Devices OEE data retrieved successfully".to_string(),

            // === TIMELINE MESSAGES ===
            Message::TimelineHeader {
                equipment_id,
                date,
                stream,
            } => format!("Equipment {} on {} ({} status)", equipment_id, date, stream),
            Message::TimelineEmpty { equipment_id, date } => {
                format!("No status entries for equipment {} on {}", equipment_id, date)
            }

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
            Message::ExportingAllData => "Exporting downtime and OEE data...".to_string(),
            Message::ExportingData(data) => format!("Exporting {} data...", data),

            // === INPUT MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}', expected YYYY-MM-DD or YYYY/MM/DD", value),
            Message::OperationFailed(reason) => format!("Operation failed: {}", reason),
        };
        write!(f, "{}", text)
    }
}
