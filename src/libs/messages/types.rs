#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleSource,
    ConfigModuleAnalytics,
    PromptSelectModules,
    PromptStatusPath,
    PromptManualStatusPath,
    PromptProductionPath,
    PromptMidnightBoundary,
    PromptOverlapResolution,
    PromptAverageMode,
    PromptDivisionByZero,
    PromptOeeStatusSource,
    PromptDowntimeReasonFallback,

    // === DOWNTIME MESSAGES ===
    DowntimeHeader,
    DowntimeHeaderForEquipment(u32),
    NoDowntimeFound,
    DowntimeRetrieved,

    // === OEE MESSAGES ===
    OeeHeader,
    OeeDailyHeader,
    OeeClassification { value: String, category: String },
    NoEligibleRecords,
    OeeRetrieved,

    // === TIMELINE MESSAGES ===
    TimelineHeader {
        equipment_id: u32,
        date: String,
        stream: String,
    },
    TimelineEmpty {
        equipment_id: u32,
        date: String,
    },

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportingAllData,
    ExportingData(String),

    // === INPUT MESSAGES ===
    InvalidDate(String),
    OperationFailed(String),
}
