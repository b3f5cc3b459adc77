use super::SourceArgs;
use crate::{
    libs::{analytics::Envelope, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct OeeArgs {
    /// Print the response envelope as JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    source: SourceArgs,
}

pub async fn cmd(args: OeeArgs) -> Result<()> {
    let result = args.source.analytics()?.oee_calculation().await?;

    if args.json {
        let envelope = Envelope::ok(Message::OeeRetrieved, result);
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    msg_print!(Message::OeeHeader, true);
    if result.details.daily.is_empty() {
        msg_info!(Message::NoEligibleRecords);
    } else {
        msg_print!(Message::OeeDailyHeader);
        View::oee(&result)?;
    }

    let classification = &result.classification;
    msg_print!(
        Message::OeeClassification {
            value: format!("{:.2}", classification.value),
            category: classification.category.to_string(),
        },
        true
    );
    msg_print!(classification.description);
    Ok(())
}
