use oeetrack::commands::Cli;
use oeetrack::libs::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    Cli::menu().await
}
