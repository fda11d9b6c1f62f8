use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub const TOP_MAPS_LIMIT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapCounter {
    pub map_slug: String,
    pub map_name: String,
    pub count: u64,
}

/// Snapshot handed to the progress sink after every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub total_games: u64,
    pub page_count: u64,
    pub unique_maps: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub year: i32,
    pub total_games: u64,
    pub unique_maps: usize,
    pub top_maps: Vec<MapCounter>,
    pub all_maps: Vec<MapCounter>,
}

impl Report {
    /// Ranks counters by play count. The sort is stable, so ties keep
    /// the order the maps were first seen in.
    pub fn new(year: i32, total_games: u64, mut counters: Vec<MapCounter>) -> Self {
        counters.sort_by(|a, b| b.count.cmp(&a.count));
        let top_maps = counters.iter().take(TOP_MAPS_LIMIT).cloned().collect();

        Self {
            year,
            total_games,
            unique_maps: counters.len(),
            top_maps,
            all_maps: counters,
        }
    }

    /// Share of all counted games, in percent.
    pub fn share(&self, count: u64) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        count as f64 / self.total_games as f64 * 100.0
    }
}

/// Per-map counters for a single aggregation run.
///
/// Counters are kept in first-seen order; the slug index points into them.
#[derive(Debug, Default)]
pub struct MapTally {
    index: FxHashMap<String, usize>,
    counters: Vec<MapCounter>,
    total_games: u64,
}

impl MapTally {
    /// Counts one game. The name is bound only when the slug is new.
    pub fn record(&mut self, map_slug: &str, map_name: &str) {
        let position = match self.index.get(map_slug) {
            Some(&position) => position,
            None => {
                self.counters.push(MapCounter {
                    map_slug: map_slug.to_string(),
                    map_name: map_name.to_string(),
                    count: 0,
                });
                self.index
                    .insert(map_slug.to_string(), self.counters.len() - 1);
                self.counters.len() - 1
            }
        };

        self.counters[position].count += 1;
        self.total_games += 1;
    }

    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    pub fn unique_maps(&self) -> usize {
        self.counters.len()
    }

    pub fn into_report(self, year: i32) -> Report {
        Report::new(year, self.total_games, self.counters)
    }
}
