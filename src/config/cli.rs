use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_FEED_URL: &str = "https://www.geoguessr.com/api/v4/feed/private";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Value of the `_ncfa` session cookie from a logged-in browser
    #[clap(long, env = "GEOGUESSR_NCFA", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Calendar year to summarize
    #[arg(long, default_value_t = 2025)]
    pub year: i32,

    /// Take calendar years in UTC instead of the local time zone
    #[arg(long)]
    pub utc: bool,

    /// Private activity feed endpoint
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Pause between page requests, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub page_delay_ms: u64,

    /// Show every map in the table instead of the top 30
    #[arg(long)]
    pub all: bool,

    /// Number of maps on the share card (1-20)
    #[arg(long, default_value_t = 15)]
    pub share_maps: usize,

    /// Write the share card to this file instead of stdout
    #[arg(long)]
    pub share_card: Option<PathBuf>,

    /// Export the report as JSON into the data directory
    #[arg(long)]
    pub export: bool,

    /// Directory to store exported reports
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: Level,

    /// Hide the progress spinner
    #[arg(long)]
    pub quiet: bool,
}
