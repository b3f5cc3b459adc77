//! Data export command.
//!
//! ```bash
//! # Downtime occurrences as CSV
//! oeetrack export downtime
//!
//! # OEE result as JSON with a custom file name
//! oeetrack export oee --format json --output oee.json
//!
//! # Both, as two Excel workbooks (report_downtime.xlsx, report_oee.xlsx)
//! oeetrack export all --format excel --output report.xlsx
//! ```

use super::SourceArgs;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Type of data to export
    #[arg(value_enum, default_value = "all")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Defaults to `oeetrack_export_<timestamp>.<ext>` in the working directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let analytics = args.source.analytics()?;
    Exporter::new(args.format, args.output).export(args.data, &analytics).await
}
