//! Wire types for the upstream NFL stats API.
//!
//! The feed is a thin JSON layer over the ingestion database, so column
//! names arrive in the mix of camelCase and snake_case the ingestion side
//! writes (`passingYds` next to `passing_attempts`). Every stat field is
//! nullable: absence means "not recorded", which is not the same thing as
//! zero and must survive deserialization intact.

use crate::cli::types::{PlayerId, Season, Week};
use serde::{Deserialize, Serialize};
use serde_json::Value;


/// The nullable stat columns shared by weekly records and season rollups.
///
/// Grouped into three families: passing, rushing, receiving. EPA values are
/// per-family totals; `*_epa_per_play`, `*_success_rate` and `cpoe` are rate
/// stats computed upstream from play-by-play data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    /// Authoritative games-played count; only populated on season rollups.
    #[serde(default)]
    pub games: Option<u32>,

    // Passing
    #[serde(default)]
    pub passing_attempts: Option<u32>,
    #[serde(default)]
    pub passing_completions: Option<u32>,
    #[serde(rename = "passingYds", default)]
    pub passing_yards: Option<i64>,
    #[serde(rename = "passing_tds", default)]
    pub passing_touchdowns: Option<u32>,
    #[serde(default)]
    pub passing_interceptions: Option<u32>,
    #[serde(default)]
    pub passing_sacks: Option<u32>,
    #[serde(default)]
    pub passing_epa: Option<f64>,
    #[serde(default)]
    pub passing_epa_per_play: Option<f64>,
    #[serde(default)]
    pub passing_success_rate: Option<f64>,
    #[serde(default)]
    pub cpoe: Option<f64>,

    // Rushing
    #[serde(default)]
    pub rushing_attempts: Option<u32>,
    #[serde(rename = "rushingYds", default)]
    pub rushing_yards: Option<i64>,
    #[serde(rename = "rushing_tds", default)]
    pub rushing_touchdowns: Option<u32>,
    #[serde(default)]
    pub rushing_epa: Option<f64>,
    #[serde(default)]
    pub rushing_epa_per_play: Option<f64>,
    #[serde(default)]
    pub rushing_success_rate: Option<f64>,

    // Receiving
    #[serde(default)]
    pub targets: Option<u32>,
    #[serde(default)]
    pub receptions: Option<u32>,
    #[serde(rename = "receivingYds", default)]
    pub receiving_yards: Option<i64>,
    #[serde(rename = "receiving_tds", default)]
    pub receiving_touchdowns: Option<u32>,
    #[serde(default)]
    pub receiving_epa: Option<f64>,
    #[serde(default)]
    pub receiving_epa_per_play: Option<f64>,
    #[serde(default)]
    pub receiving_success_rate: Option<f64>,
}

/// One stat row exactly as served by the feed.
///
/// `season` is kept untyped here: the upstream payload is loosely typed and
/// has been observed carrying both numbers and strings. Validation happens
/// in [`crate::commands::record_filters::filter_and_convert_records`], which
/// drops rows whose season label is not a year.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGameRecord {
    #[serde(default)]
    pub season: Value,
    /// `null`/absent marks a season-level rollup rather than one game.
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(flatten)]
    pub stats: StatLine,
}

/// A validated per-game (or season-rollup) stat record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub season: Season,
    /// `None` marks a season-level rollup rather than one game.
    pub week: Option<Week>,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl GameRecord {
    /// True when this record is a pre-aggregated full-season total.
    pub fn is_season_level(&self) -> bool {
        self.week.is_none()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl GameRecord {
    /// Create an empty weekly record for testing.
    pub fn test_weekly(season: u16, week: u16) -> Self {
        Self {
            season: Season::new(season),
            week: Some(Week::new(week)),
            stats: StatLine::default(),
        }
    }

    /// Create an empty season-level rollup for testing.
    pub fn test_season_level(season: u16, games: Option<u32>) -> Self {
        Self {
            season: Season::new(season),
            week: None,
            stats: StatLine {
                games,
                ..StatLine::default()
            },
        }
    }
}

/// Player identity from the feed's player directory and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPlayer {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    /// External pro-football-reference id carried through from ingestion.
    #[serde(rename = "pfr_id", default)]
    pub pfr_id: Option<String>,
}
