use super::SourceArgs;
use crate::{
    libs::{analytics::TimelineStream, messages::Message, timestamp::CalendarDay, view::View},
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TimelineArgs {
    /// Equipment to inspect
    #[arg(short, long)]
    equipment: u32,

    /// Day to inspect: `today`, `YYYY-MM-DD` or `YYYY/MM/DD`
    #[arg(short, long, default_value = "today")]
    date: String,

    /// Status stream to show
    #[arg(short, long, value_enum, default_value_t = TimelineStream::Merged)]
    stream: TimelineStream,

    #[command(flatten)]
    source: SourceArgs,
}

pub async fn cmd(args: TimelineArgs) -> Result<()> {
    let day = parse_day(&args.date)?;
    let entries = args.source.analytics()?.timeline(args.equipment, day, args.stream).await?;

    if entries.is_empty() {
        msg_info!(Message::TimelineEmpty {
            equipment_id: args.equipment,
            date: day.to_string(),
        });
        return Ok(());
    }

    msg_print!(
        Message::TimelineHeader {
            equipment_id: args.equipment,
            date: day.to_string(),
            stream: args.stream.to_string(),
        },
        true
    );
    View::timeline(&entries, day)
}

fn parse_day(date_str: &str) -> Result<CalendarDay> {
    if date_str.to_lowercase() == "today" {
        Ok(CalendarDay::today())
    } else {
        date_str
            .parse()
            .map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}
