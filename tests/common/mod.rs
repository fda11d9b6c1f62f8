use async_trait::async_trait;
use geoguessr_wrapped::domain::{FeedEntry, FeedPage, FeedSource, ACTIVITY_GROUP};
use geoguessr_wrapped::error::{Result, WrappedError};
use geoguessr_wrapped::services::FeedAggregator;
use geoguessr_wrapped::time_utils::YearZone;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Feed that replays canned pages and records every cursor it was asked for.
#[derive(Default)]
pub struct ScriptedFeed {
    pages: Mutex<VecDeque<Result<FeedPage>>>,
    cursors: Mutex<Vec<Option<String>>>,
}

#[allow(dead_code)]
impl ScriptedFeed {
    pub fn new(pages: Vec<Result<FeedPage>>) -> Arc<Self> {
        Arc::new(Self {
            pages: Mutex::new(pages.into()),
            cursors: Mutex::new(Vec::new()),
        })
    }

    pub fn cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.pages.lock().unwrap().len()
    }
}

#[async_trait]
impl FeedSource for ScriptedFeed {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<FeedPage> {
        self.cursors.lock().unwrap().push(cursor.map(str::to_owned));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(WrappedError::Other("feed script exhausted".to_string())))
    }
}

/// Aggregator over `feed` for 2025 in UTC with no pause between pages.
#[allow(dead_code)]
pub fn aggregator(feed: Arc<ScriptedFeed>) -> FeedAggregator {
    FeedAggregator::new(feed, 2025)
        .with_zone(YearZone::Utc)
        .with_page_delay(Duration::ZERO)
}

/// A finished standard game as it appears inside an activity group.
#[allow(dead_code)]
pub fn game(slug: &str, name: &str, time: &str) -> Value {
    json!({
        "type": 1,
        "time": time,
        "payload": {"gameMode": "Standard", "mapSlug": slug, "mapName": name}
    })
}

#[allow(dead_code)]
pub fn group(payload: Value, time: &str) -> FeedEntry {
    FeedEntry {
        kind: ACTIVITY_GROUP,
        payload: Some(Value::String(payload.to_string())),
        time: Some(time.into()),
    }
}

#[allow(dead_code)]
pub fn page(entries: Vec<FeedEntry>, token: Option<&str>) -> Result<FeedPage> {
    Ok(FeedPage {
        entries,
        pagination_token: token.map(str::to_owned),
    })
}
