//! Ingestion-boundary validation of raw feed records

use crate::cli::types::{Season, Week};
use crate::feed::types::{GameRecord, RawGameRecord};
use serde_json::Value;

/// Parse a season label out of the feed's loosely-typed season value.
/// Accepts a JSON integer or a string holding one.
pub fn season_label(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    }
}

/// Validate raw feed rows into typed game records.
///
/// Rows whose season label is not a year are dropped and reported on
/// stderr rather than failing the batch. That covers plain garbage as well
/// as structural key names ("__proto__", "constructor", "prototype") that
/// must never reach the keyed JSON objects downstream consumers build from
/// this data.
pub fn filter_and_convert_records(records: Vec<RawGameRecord>) -> Vec<GameRecord> {
    records
        .into_iter()
        .filter_map(|raw| match season_label(&raw.season) {
            Some(year) => Some(GameRecord {
                season: Season::new(year),
                week: raw.week.map(Week::new),
                stats: raw.stats,
            }),
            None => {
                eprintln!("⚠ Dropping game record with invalid season label: {}", raw.season);
                None
            }
        })
        .collect()
}
