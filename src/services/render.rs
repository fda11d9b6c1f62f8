use crate::domain::{MapCounter, Report, TOP_MAPS_LIMIT};
use std::fmt::Write;

pub const SHARE_MAPS_MIN: usize = 1;
pub const SHARE_MAPS_MAX: usize = 20;
pub const SHARE_MAPS_DEFAULT: usize = 15;

const SHARE_NAME_WIDTH: usize = 40;
const SHARE_NAME_FLOOR: usize = 10;
const ELLIPSIS: &str = "...";

/// Ranked table of the report, either the top 30 or every map.
pub fn render_table(report: &Report, show_all: bool) -> String {
    let (title, maps) = if show_all {
        (format!("All {} Maps", report.unique_maps), &report.all_maps)
    } else {
        (format!("Top {} Maps", TOP_MAPS_LIMIT), &report.top_maps)
    };

    let name_width = maps
        .iter()
        .map(|m| m.map_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Map".len());

    let mut out = String::new();
    let _ = writeln!(out, "GeoGuessr Wrapped {}", report.year);
    let _ = writeln!(
        out,
        "Total games: {}    Unique maps: {}",
        group_thousands(report.total_games),
        report.unique_maps
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(
        out,
        "{:>4}  {:<name_width$}  {:>6}  {:>6}",
        "Rank", "Map", "Plays", "Share"
    );

    for (index, map) in maps.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:<name_width$}  {:>6}  {:>5.1}%",
            index + 1,
            map.map_name,
            map.count,
            report.share(map.count)
        );
    }

    out
}

pub fn clamp_share_maps(requested: usize) -> usize {
    requested.clamp(SHARE_MAPS_MIN, SHARE_MAPS_MAX)
}

/// Compact summary meant for sharing, listing up to `map_count` maps.
pub fn render_share_card(report: &Report, map_count: usize) -> String {
    let map_count = clamp_share_maps(map_count);
    let maps: Vec<&MapCounter> = report.all_maps.iter().take(map_count).collect();

    let mut out = String::new();
    let _ = writeln!(out, "GeoGuessr Wrapped {}", report.year);
    let _ = writeln!(out, "Top {} Most Played Maps", map_count);
    let _ = writeln!(out, "{} Games Played", report.total_games);
    let _ = writeln!(out);

    for (index, map) in maps.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:<SHARE_NAME_WIDTH$}  {:>5}  {:>5.1}%",
            index + 1,
            truncate_name(&map.map_name),
            map.count,
            report.share(map.count)
        );
    }

    out
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= SHARE_NAME_WIDTH {
        return name.to_string();
    }

    let mut chars: Vec<char> = name.chars().collect();
    while chars.len() + ELLIPSIS.len() > SHARE_NAME_WIDTH && chars.len() > SHARE_NAME_FLOOR {
        chars.pop();
    }

    let mut short: String = chars.into_iter().collect();
    short.push_str(ELLIPSIS);
    short
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MapTally;

    fn sample_report(maps: usize) -> Report {
        let mut tally = MapTally::default();
        for i in 0..maps {
            for _ in 0..(maps - i) {
                tally.record(&format!("map-{i}"), &format!("Map {i}"));
            }
        }
        tally.into_report(2025)
    }

    #[test]
    fn test_table_shows_share_with_one_decimal() {
        let mut tally = MapTally::default();
        tally.record("world", "World");
        tally.record("world", "World");
        tally.record("europe", "Europe");
        let table = render_table(&tally.into_report(2025), false);

        assert!(table.contains("Top 30 Maps"));
        assert!(table.contains("66.7%"));
        assert!(table.contains("33.3%"));
        assert!(table.find("World").unwrap() < table.find("Europe").unwrap());
    }

    #[test]
    fn test_table_all_lists_every_map() {
        let report = sample_report(35);
        let top = render_table(&report, false);
        let all = render_table(&report, true);

        assert!(!top.contains("Map 34"));
        assert!(all.contains("All 35 Maps"));
        assert!(all.contains("Map 34"));
    }

    #[test]
    fn test_share_card_clamps_map_count() {
        let report = sample_report(25);

        let card = render_share_card(&report, 0);
        assert!(card.contains("Top 1 Most Played Maps"));
        assert!(card.contains(" 1. Map 0"));
        assert!(!card.contains(" 2. "));

        let card = render_share_card(&report, 99);
        assert!(card.contains("Top 20 Most Played Maps"));
        assert!(card.contains("20. Map 19"));
        assert!(!card.contains("21. "));
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("World"), "World");

        let long = "An Extraordinarily Long Community Map Name For Testing";
        let short = truncate_name(long);
        assert_eq!(short.chars().count(), SHARE_NAME_WIDTH);
        assert!(short.ends_with("..."));
        assert!(long.starts_with(short.trim_end_matches("...")));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
