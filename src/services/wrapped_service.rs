use crate::config::Config;
use crate::domain::{FeedSource, Report, ReportStore};
use crate::error::Result;
use crate::services::aggregation::FeedAggregator;
use crate::services::progress::FeedProgress;
use crate::services::render::{clamp_share_maps, render_share_card, render_table};
use crate::time_utils::YearZone;
use std::sync::Arc;
use tracing::{info, warn};

pub struct WrappedService {
    config: Config,
    aggregator: FeedAggregator,
    store: Arc<dyn ReportStore>,
}

impl WrappedService {
    pub fn new(config: Config, source: Arc<dyn FeedSource>, store: Arc<dyn ReportStore>) -> Self {
        let zone = if config.args.utc {
            YearZone::Utc
        } else {
            YearZone::Local
        };
        let aggregator = FeedAggregator::new(source, config.args.year)
            .with_zone(zone)
            .with_page_delay(config.page_delay());

        Self {
            config,
            aggregator,
            store,
        }
    }

    pub async fn process(&self) -> Result<Report> {
        info!("Fetching {} games from the activity feed", self.config.args.year);

        let report = self.collect().await?;

        print!("{}", render_table(&report, self.config.args.all));
        println!();
        self.write_share_card(&report)?;

        if self.config.args.export {
            self.store.save_report(&report)?;
        }

        Ok(report)
    }

    async fn collect(&self) -> Result<Report> {
        let progress = FeedProgress::new(self.config.args.quiet)?;

        match self
            .aggregator
            .aggregate_with_progress(|p| progress.update(p))
            .await
        {
            Ok(report) => {
                progress.finish(report.total_games);
                Ok(report)
            }
            Err(e) => {
                progress.abandon();
                Err(e)
            }
        }
    }

    fn write_share_card(&self, report: &Report) -> Result<()> {
        let requested = self.config.args.share_maps;
        let map_count = clamp_share_maps(requested);
        if map_count != requested {
            warn!("Share card map count {} clamped to {}", requested, map_count);
        }

        let card = render_share_card(report, map_count);
        match &self.config.args.share_card {
            Some(path) => {
                std::fs::write(path, card)?;
                info!("Saved share card to {:?}", path);
            }
            None => print!("{}", card),
        }
        Ok(())
    }
}
