use super::SourceArgs;
use crate::{
    libs::{analytics::Envelope, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DowntimeArgs {
    /// Only count downtime of this equipment
    #[arg(short, long)]
    equipment: Option<u32>,

    /// Print the response envelope as JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    source: SourceArgs,
}

pub async fn cmd(args: DowntimeArgs) -> Result<()> {
    let occurrences = args.source.analytics()?.downtime_aggregate(args.equipment).await?;

    if args.json {
        let envelope = Envelope::ok(Message::DowntimeRetrieved, occurrences);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    match args.equipment {
        Some(id) => msg_print!(Message::DowntimeHeaderForEquipment(id), true),
        None => msg_print!(Message::DowntimeHeader, true),
    }

    if occurrences.is_empty() {
        msg_info!(Message::NoDowntimeFound);
        return Ok(());
    }

    View::occurrences(&occurrences)
}
