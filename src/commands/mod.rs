//! Command-line interface.
//!
//! Every analytics command shares the [`SourceArgs`] flags, which override
//! the fixture paths stored in the configuration for a single invocation.
//!
//! ## Commands
//!
//! - **init**: interactive configuration wizard, or `--delete` to reset
//! - **downtime**: downtime occurrence counts
//! - **oee**: OEE classification with daily and overall ratios
//! - **timeline**: one equipment's status entries for one day
//! - **export**: write downtime and/or OEE data to CSV, JSON or Excel

pub mod downtime;
pub mod export;
pub mod init;
pub mod oee;
pub mod timeline;

use crate::libs::analytics::DeviceAnalytics;
use crate::libs::config::Config;
use crate::source::JsonFixtures;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Count downtime occurrences per equipment, day and reason")]
    Downtime(downtime::DowntimeArgs),
    #[command(about = "Calculate Overall Equipment Effectiveness")]
    Oee(oee::OeeArgs),
    #[command(about = "Show one equipment's status entries for a day")]
    Timeline(timeline::TimelineArgs),
    #[command(about = "Export downtime and OEE data to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Downtime(args) => downtime::cmd(args).await,
            Commands::Oee(args) => oee::cmd(args).await,
            Commands::Timeline(args) => timeline::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Fixture path overrides shared by the analytics commands.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Automatic status JSON file
    #[arg(long, value_name = "PATH")]
    pub status: Option<PathBuf>,

    /// Manual status JSON file
    #[arg(long, value_name = "PATH")]
    pub manual_status: Option<PathBuf>,

    /// Production JSON file
    #[arg(long, value_name = "PATH")]
    pub production: Option<PathBuf>,
}

impl SourceArgs {
    /// Builds the analytics use cases from the stored configuration with
    /// these overrides applied.
    pub fn analytics(&self) -> Result<DeviceAnalytics<JsonFixtures>> {
        let config = Config::read()?;
        let mut source = config.source.unwrap_or_default();
        if let Some(path) = &self.status {
            source.status_path = path.clone();
        }
        if let Some(path) = &self.manual_status {
            source.manual_status_path = path.clone();
        }
        if let Some(path) = &self.production {
            source.production_path = path.clone();
        }

        Ok(DeviceAnalytics::new(
            JsonFixtures::new(source),
            config.analytics.unwrap_or_default(),
        ))
    }
}
