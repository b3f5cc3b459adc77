//! Configuration management for oeetrack.
//!
//! Settings are stored as pretty-printed JSON in the platform application
//! data directory (see [`DataStorage`]). The file is optional: a missing file
//! yields [`Config::default`], and every section is itself optional so that a
//! partially written file keeps working.
//!
//! ## Sections
//!
//! - **Source**: where the automatic status, manual status and production
//!   fixtures live
//! - **Analytics**: the strategy switches of the analytics core (midnight
//!   boundary, overlap resolution, averaging, division-by-zero handling, the
//!   status stream used for OEE and the fallback reason for unexplained
//!   downtime)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use oeetrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! let analytics = config.analytics.unwrap_or_default();
//! println!("Overlap resolution: {}", analytics.overlap_resolution);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::downtime::DEFAULT_DOWN_REASON;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Where an interval ending exactly at the next midnight belongs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MidnightBoundary {
    /// Any change of written date splits, so an end at `00:00:00` leaves a
    /// zero-length piece on the following day.
    #[default]
    Split,
    /// An end at exactly `00:00:00` of the next day stays on the start day.
    Attach,
}

/// How manual status entries take time away from automatic ones.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverlapResolution {
    /// Only automatic entries that fully contain a manual entry are trimmed.
    #[default]
    Containment,
    /// Every automatic entry overlapping a manual entry is trimmed.
    Clip,
}

/// How daily and overall averages are formed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AverageMode {
    /// Exact mean of all values, rounded once.
    #[default]
    Batch,
    /// Running mean re-rounded after each value.
    Incremental,
}

/// What to do when an OEE ratio has a zero denominator.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DivisionByZeroPolicy {
    /// Abort the calculation with an error.
    #[default]
    Reject,
    /// Record 0.0 for the affected day.
    Zero,
}

/// Status stream joined with production runs for OEE.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusSource {
    /// Raw sensor stream.
    #[default]
    Automatic,
    /// Sensor stream with manual corrections applied.
    Merged,
}

macro_rules! display_as_value_enum {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                match self.to_possible_value() {
                    Some(value) => write!(f, "{}", value.get_name()),
                    None => write!(f, "{:?}", self),
                }
            }
        })*
    };
}

display_as_value_enum!(MidnightBoundary, OverlapResolution, AverageMode, DivisionByZeroPolicy, StatusSource);

/// Locations of the three fixture files.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SourceConfig {
    /// Automatic (sensor) status intervals.
    pub status_path: PathBuf,
    /// Manually entered status corrections.
    pub manual_status_path: PathBuf,
    /// Production runs with planned and actual quantities.
    pub production_path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            status_path: PathBuf::from("fixtures/status.json"),
            manual_status_path: PathBuf::from("fixtures/manual_status.json"),
            production_path: PathBuf::from("fixtures/production.json"),
        }
    }
}

/// Strategy switches of the analytics core.
///
/// The defaults favour corrected behavior where the legacy output had a
/// known flaw (averaging, division by zero) and legacy parity elsewhere
/// (overlap resolution, status stream for OEE).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub midnight_boundary: MidnightBoundary,
    pub overlap_resolution: OverlapResolution,
    pub average_mode: AverageMode,
    pub division_by_zero: DivisionByZeroPolicy,
    pub oee_status_source: StatusSource,
    /// Reason reported for down entries recorded without one.
    pub downtime_reason_fallback: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            midnight_boundary: MidnightBoundary::default(),
            overlap_resolution: OverlapResolution::default(),
            average_mode: AverageMode::default(),
            division_by_zero: DivisionByZeroPolicy::default(),
            oee_status_source: StatusSource::default(),
            downtime_reason_fallback: DEFAULT_DOWN_REASON.to_string(),
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default configuration when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether a file was removed.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard.
    ///
    /// Starts from the stored configuration (or defaults), lets the user pick
    /// the sections to edit and prompts for each value with the current one
    /// pre-filled.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "source".to_string(),
                name: "Source".to_string(),
            },
            ConfigModule {
                key: "analytics".to_string(),
                name: "Analytics".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "source" => {
                    let default = config.source.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSource);
                    config.source = Some(SourceConfig {
                        status_path: prompt_path(Message::PromptStatusPath, &default.status_path)?,
                        manual_status_path: prompt_path(Message::PromptManualStatusPath, &default.manual_status_path)?,
                        production_path: prompt_path(Message::PromptProductionPath, &default.production_path)?,
                    });
                }
                "analytics" => {
                    let default = config.analytics.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleAnalytics);
                    config.analytics = Some(AnalyticsConfig {
                        midnight_boundary: prompt_choice(Message::PromptMidnightBoundary, default.midnight_boundary)?,
                        overlap_resolution: prompt_choice(Message::PromptOverlapResolution, default.overlap_resolution)?,
                        average_mode: prompt_choice(Message::PromptAverageMode, default.average_mode)?,
                        division_by_zero: prompt_choice(Message::PromptDivisionByZero, default.division_by_zero)?,
                        oee_status_source: prompt_choice(Message::PromptOeeStatusSource, default.oee_status_source)?,
                        downtime_reason_fallback: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDowntimeReasonFallback.to_string())
                            .default(default.downtime_reason_fallback)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

fn prompt_path(prompt: Message, default: &Path) -> Result<PathBuf> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.display().to_string())
        .interact_text()?;
    Ok(PathBuf::from(value))
}

fn prompt_choice<T: ValueEnum + Copy + PartialEq + fmt::Display>(prompt: Message, current: T) -> Result<T> {
    let variants = T::value_variants();
    let position = variants.iter().position(|v| *v == current).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&variants.iter().map(|v| v.to_string()).collect::<Vec<_>>())
        .default(position)
        .interact()?;
    Ok(variants[selection])
}
