use crate::domain::{FeedPage, FeedSource};
use crate::error::{Result, WrappedError};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

/// Reads the private activity feed with the session baked into `client`.
pub struct FeedClient {
    client: Client,
    feed_url: String,
}

impl FeedClient {
    pub fn new(client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<FeedPage> {
        let mut request = self.client.get(&self.feed_url);
        if let Some(token) = cursor {
            request = request.query(&[("paginationToken", token)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Feed API error: Status {}", status);
            return Err(WrappedError::Status {
                status: status.as_u16(),
            });
        }

        let page: FeedPage = response.json().await?;
        debug!(
            "Fetched feed page with {} entries (more: {})",
            page.entries.len(),
            page.pagination_token.is_some()
        );

        Ok(page)
    }
}
