use crate::config::cli::Args;
use crate::error::{Result, WrappedError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

pub mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        match args.session_cookie.as_deref() {
            Some(cookie) if !cookie.is_empty() => {
                let mut value = HeaderValue::from_str(&format!("_ncfa={cookie}"))
                    .map_err(|e| WrappedError::Other(format!("Invalid session cookie: {e}")))?;
                value.set_sensitive(true);
                headers.insert(COOKIE, value);
                info!("Using session cookie for feed requests");
            }
            _ => warn!("No session cookie set, the private feed will likely reject requests"),
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .default_headers(headers)
            .build()?;

        Ok(Self { args, http_client })
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.args.page_delay_ms)
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if self.args.export && !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
            info!("Created data dir {:?}", self.args.data_dir);
        }
        Ok(())
    }
}
