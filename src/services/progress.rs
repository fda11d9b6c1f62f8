use crate::domain::Progress;
use crate::error::{Result, WrappedError};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Terminal spinner fed from the aggregator's progress callback.
pub struct FeedProgress {
    bar: ProgressBar,
}

impl FeedProgress {
    pub fn new(hidden: bool) -> Result<Self> {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("[{elapsed_precise}] {spinner:.cyan} {msg}")
                .map_err(|e| WrappedError::Other(e.to_string()))?,
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        bar.set_message("Fetching games...");

        Ok(Self { bar })
    }

    pub fn update(&self, progress: Progress) {
        self.bar.set_message(format!(
            "Page {} | {} games | {} maps",
            progress.page_count, progress.total_games, progress.unique_maps
        ));
    }

    pub fn finish(&self, total_games: u64) {
        self.bar
            .finish_with_message(format!("Done! Found {} games", total_games));
    }

    pub fn abandon(&self) {
        self.bar.abandon_with_message("Fetching failed");
    }
}
