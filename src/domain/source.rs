use super::FeedPage;
use crate::error::Result;
use async_trait::async_trait;

/// A cursor-paginated, newest-first activity feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches the page starting at `cursor`, or the first page when `None`.
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<FeedPage>;
}
