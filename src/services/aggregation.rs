use crate::domain::{Activity, FeedEntry, FeedSource, MapTally, Progress, Report, ACTIVITY_GROUP};
use crate::error::Result;
use crate::time_utils::{effective_year, YearZone};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

enum PageScan {
    Continue,
    ReachedOlderYear,
}

/// Walks the feed from newest to oldest and counts standard games per map
/// for one calendar year.
///
/// The walk stops at the first game dated before the target year, so the
/// source must return entries strictly newest first.
pub struct FeedAggregator {
    source: Arc<dyn FeedSource>,
    year: i32,
    zone: YearZone,
    page_delay: Duration,
}

impl FeedAggregator {
    pub fn new(source: Arc<dyn FeedSource>, year: i32) -> Self {
        Self {
            source,
            year,
            zone: YearZone::default(),
            page_delay: Duration::from_millis(100),
        }
    }

    pub fn with_zone(mut self, zone: YearZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    pub async fn aggregate(&self) -> Result<Report> {
        self.aggregate_with_progress(|_| {}).await
    }

    /// Runs one full aggregation, calling `on_progress` after every page.
    ///
    /// Any failed page fetch aborts the run; nothing is kept between runs.
    pub async fn aggregate_with_progress<F>(&self, mut on_progress: F) -> Result<Report>
    where
        F: FnMut(Progress),
    {
        let mut tally = MapTally::default();
        let mut cursor: Option<String> = None;
        let mut page_count = 0u64;

        loop {
            let page = self.source.fetch_page(cursor.as_deref()).await?;
            page_count += 1;
            cursor = page.pagination_token.filter(|token| !token.is_empty());

            let scan = self.scan_entries(&page.entries, &mut tally);
            debug!(
                "Page {}: {} games across {} maps so far",
                page_count,
                tally.total_games(),
                tally.unique_maps()
            );

            on_progress(Progress {
                total_games: tally.total_games(),
                page_count,
                unique_maps: tally.unique_maps(),
            });

            if let PageScan::ReachedOlderYear = scan {
                info!("Reached games before {} on page {}", self.year, page_count);
                break;
            }
            if cursor.is_none() {
                info!("Feed exhausted after {} pages", page_count);
                break;
            }

            sleep(self.page_delay).await;
        }

        info!(
            "Counted {} games on {} maps in {}",
            tally.total_games(),
            tally.unique_maps(),
            self.year
        );
        Ok(tally.into_report(self.year))
    }

    fn scan_entries(&self, entries: &[FeedEntry], tally: &mut MapTally) -> PageScan {
        for entry in entries.iter().filter(|e| e.kind == ACTIVITY_GROUP) {
            let activities = match entry.activities() {
                Ok(activities) => activities,
                Err(e) => {
                    debug!("Skipping malformed feed entry: {}", e);
                    continue;
                }
            };

            for activity in activities {
                let Activity::CompletedGame { time, game } = activity else {
                    continue;
                };
                let Some(year) = effective_year(time.as_ref(), entry.time.as_ref(), self.zone)
                else {
                    continue;
                };

                if year < self.year {
                    return PageScan::ReachedOlderYear;
                }
                if year == self.year {
                    if let Some((slug, name)) = game.countable() {
                        tally.record(slug, name);
                    }
                }
            }
        }

        PageScan::Continue
    }
}
