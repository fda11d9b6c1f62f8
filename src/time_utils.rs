//! Calendar-year extraction for feed timestamps.

use crate::domain::is_truthy;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;

/// Zone in which a timestamp's calendar year is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearZone {
    #[default]
    Local,
    Utc,
}

impl YearZone {
    fn year_of<Tz: TimeZone>(self, date: DateTime<Tz>) -> i32 {
        match self {
            YearZone::Local => date.with_timezone(&Local).year(),
            YearZone::Utc => date.with_timezone(&Utc).year(),
        }
    }
}

/// Year of the first truthy timestamp among `own` and `fallback`.
///
/// Timestamps are ISO-8601 text or epoch milliseconds. The fallback is only
/// consulted when `own` is missing, empty or zero; an unparseable `own`
/// yields `None` rather than falling through.
pub fn effective_year(own: Option<&Value>, fallback: Option<&Value>, zone: YearZone) -> Option<i32> {
    let raw = own
        .filter(|t| is_truthy(t))
        .or_else(|| fallback.filter(|t| is_truthy(t)))?;

    match raw {
        Value::String(text) => parse_year(text, zone),
        Value::Number(millis) => millis_year(millis.as_f64()?, zone),
        _ => None,
    }
}

fn millis_year(millis: f64, zone: YearZone) -> Option<i32> {
    if !millis.is_finite() {
        return None;
    }
    let date = Utc.timestamp_millis_opt(millis.trunc() as i64).single()?;
    Some(zone.year_of(date))
}

pub fn parse_year(raw: &str, zone: YearZone) -> Option<i32> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(zone.year_of(date));
    }

    // Wall-clock time without an offset is already in the reading zone
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.year());
    }

    // Bare dates mean midnight UTC
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(zone.year_of(Utc.from_utc_datetime(&midnight)))
}
