//! Season leaderboards over the stored player population.
//!
//! Works entirely from the local database: every stored player's records
//! for the target season are aggregated (in parallel, one player per task)
//! and ranked by the chosen counting stat.

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    cli::types::{LeaderStat, PlayerId, Position, Season},
    feed::types::GameRecord,
    stats::aggregate::aggregate_seasons,
    storage::{Player, PlayerDatabase},
    Result,
};

/// Configuration parameters for the season-leaders command.
#[derive(Debug)]
pub struct SeasonLeadersParams {
    pub as_json: bool,
    pub season: Season,
    pub stat: LeaderStat,
    pub positions: Option<Vec<Position>>,
    pub limit: usize,
}

/// One leaderboard entry.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderRow {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub team: Option<String>,
    pub games: u32,
    pub value: i64,
}

/// Rank players by a counting stat for one season.
///
/// Players whose aggregate for the season is zero (or who have no records
/// at all) are excluded; a leaderboard full of dashes helps nobody.
pub fn rank_leaders(
    candidates: Vec<(Player, Vec<GameRecord>)>,
    season: Season,
    stat: LeaderStat,
    limit: usize,
) -> Vec<LeaderRow> {
    let mut rows: Vec<LeaderRow> = candidates
        .into_par_iter()
        .filter_map(|(player, records)| {
            let seasons = aggregate_seasons(&records);
            let agg = seasons.into_iter().find(|a| a.season == season)?;
            let value = stat.value_of(&agg);
            if value <= 0 {
                return None;
            }
            Some(LeaderRow {
                rank: 0, // assigned after the sort
                player_id: player.player_id,
                name: player.name,
                position: player.position,
                team: player.team,
                games: agg.game_count,
                value,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    rows.truncate(limit);
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Print the leaderboard for a season and stat.
pub fn handle_season_leaders(params: SeasonLeadersParams) -> Result<()> {
    println!("Connecting to database...");
    let db = PlayerDatabase::new()?;

    let players = db.get_players_by_positions(params.positions.as_ref())?;
    println!(
        "Aggregating {} players for season {}...",
        players.len(),
        params.season
    );

    // SQLite connections don't cross threads, so records are pulled on this
    // thread and only the aggregation fans out
    let mut candidates = Vec::with_capacity(players.len());
    for player in players {
        let records = db.get_player_season_records(player.player_id, params.season)?;
        if !records.is_empty() {
            candidates.push((player, records));
        }
    }

    let rows = rank_leaders(candidates, params.season, params.stat, params.limit);

    if rows.is_empty() {
        println!("⚠ No records stored for season {}", params.season);
        return Ok(());
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("\n{} leaders, {} season:", params.stat, params.season);
        for row in rows {
            println!(
                "{:>3}. {} ({}){} [{} games] {}",
                row.rank,
                row.name,
                row.position,
                row.team
                    .as_deref()
                    .map(|t| format!(" - {}", t))
                    .unwrap_or_default(),
                row.games,
                row.value,
            );
        }
    }

    Ok(())
}
