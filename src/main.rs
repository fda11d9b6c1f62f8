use clap::Parser;
use geoguessr_wrapped::config::cli::Args;
use geoguessr_wrapped::config::Config;
use geoguessr_wrapped::error::Result;
use geoguessr_wrapped::infrastructure::{FeedClient, FileSystemStore};
use geoguessr_wrapped::services::WrappedService;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(args)?;
    config.ensure_directories()?;

    let source = Arc::new(FeedClient::new(
        config.http_client.clone(),
        config.args.feed_url.clone(),
    ));
    let store = Arc::new(FileSystemStore::new(config.args.data_dir.clone()));

    let service = WrappedService::new(config, source, store);
    let report = service.process().await?;

    info!(
        "Wrapped completed: {} games on {} maps",
        report.total_games, report.unique_maps
    );
    Ok(())
}
