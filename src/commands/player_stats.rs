//! Career statistics for a single player.
//!
//! This is the main lookup path: find the player, make sure their game
//! records are stored locally (fetching from the stats API when they are
//! not), fold the records into per-season aggregates, and print a career
//! table whose stat families depend on the player's position.
//!
//! Aggregation always runs against what the database holds right now; the
//! per-season numbers are never stored, so a re-run after a sync reflects
//! the new records with no invalidation step.

use serde::Serialize;

use crate::{
    cli::types::Season,
    stats::{
        aggregate::{
            aggregate_seasons, career_totals, CareerTotals, PassingTotals, ReceivingTotals,
            RushingTotals, SeasonAggregate,
        },
        display::{
            completion_percentage, display_count, display_epa, display_percent, display_value,
        },
        visibility::FamilyVisibility,
    },
    storage::{Player, PlayerDatabase},
    Result, StatsError,
};

use super::common::{fetch_records_with_message, resolve_api_base};

/// Configuration parameters for the player-stats command.
#[derive(Debug)]
pub struct PlayerStatsParams {
    pub debug: bool,
    pub as_json: bool,
    pub api_url: Option<String>,
    pub player_name: String,
    pub season: Option<Season>,
    pub refresh: bool,
    pub clear_db: bool,
}

/// Per-season row of the JSON export. Families the position projector
/// hides are omitted entirely rather than zero-filled.
#[derive(Debug, Serialize)]
struct SeasonRow<'a> {
    season: u16,
    games: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    passing: Option<&'a PassingTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rushing: Option<&'a RushingTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    receiving: Option<&'a ReceivingTotals>,
}

#[derive(Debug, Serialize)]
struct CareerReport<'a> {
    player: &'a Player,
    visibility: FamilyVisibility,
    seasons: Vec<SeasonRow<'a>>,
    totals: TotalsRow<'a>,
}

#[derive(Debug, Serialize)]
struct TotalsRow<'a> {
    seasons: u32,
    games: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    passing: Option<&'a PassingTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rushing: Option<&'a RushingTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    receiving: Option<&'a ReceivingTotals>,
}

/// Look up one player's season-by-season statistics.
///
/// # Errors
///
/// Returns an error if:
/// - The API base URL is missing and not set in the environment
/// - The database cannot be opened
/// - The player is unknown to both the database and the feed
/// - The stats API is unavailable while a fetch is needed
pub async fn handle_player_stats(params: PlayerStatsParams) -> Result<()> {
    let base_url = resolve_api_base(params.api_url)?;
    println!("Connecting to database...");
    let mut db = PlayerDatabase::new()?;

    if params.clear_db {
        println!("Clearing all database data...");
        db.clear_all_data()?;
        println!("✓ Database cleared successfully!");
    }

    let player = lookup_player(&mut db, &base_url, &params.player_name, params.debug).await?;

    // Records already on disk are good enough unless a refresh was asked for
    let use_cached = !params.refresh && db.has_records_for_player(player.player_id)?;

    if use_cached {
        println!("Using stored game records for {}...", player.name);
    } else {
        println!("Fetching game records for {} from the stats API...", player.name);
        let records = fetch_records_with_message(
            params.debug,
            &base_url,
            player.player_id,
            &player.name,
            params.refresh,
            true, // verbose
        )
        .await?;

        let mut stored = 0;
        for record in &records {
            if db.upsert_game_record(player.player_id, record, params.refresh)? {
                stored += 1;
            }
        }
        println!("✓ Stored {} game records", stored);
    }

    let records = db.get_player_records(player.player_id)?;
    if records.is_empty() {
        println!("⚠ No game records stored for {}", player.name);
        return Ok(());
    }

    let mut seasons = aggregate_seasons(&records);
    if let Some(season) = params.season {
        seasons.retain(|s| s.season == season);
    }

    let visibility = FamilyVisibility::for_player(&player.position, &seasons);
    let totals = career_totals(&seasons);

    if params.as_json {
        let report = CareerReport {
            player: &player,
            visibility,
            seasons: seasons
                .iter()
                .map(|s| SeasonRow {
                    season: s.season.as_u16(),
                    games: s.game_count,
                    passing: visibility.passing.then_some(&s.passing),
                    rushing: visibility.rushing.then_some(&s.rushing),
                    receiving: visibility.receiving.then_some(&s.receiving),
                })
                .collect(),
            totals: TotalsRow {
                seasons: totals.seasons,
                games: totals.game_count,
                passing: visibility.passing.then_some(&totals.passing),
                rushing: visibility.rushing.then_some(&totals.rushing),
                receiving: visibility.receiving.then_some(&totals.receiving),
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "\n{} ({}){}",
            player.name,
            player.position,
            player
                .team
                .as_deref()
                .map(|t| format!(" - {}", t))
                .unwrap_or_default()
        );
        render_career_table(&seasons, &totals, visibility);
    }

    Ok(())
}

/// Find the player in the database, falling back to a feed search.
async fn lookup_player(
    db: &mut PlayerDatabase,
    base_url: &str,
    name: &str,
    debug: bool,
) -> Result<Player> {
    if let Some(player) = db.find_player_by_name(name)? {
        return Ok(player);
    }

    println!("Player not stored locally, searching the stats API for {:?}...", name);
    let matches = crate::feed::http::search_players(debug, base_url, name).await?;

    let Some(found) = matches.into_iter().next() else {
        return Err(StatsError::PlayerNotFound {
            name: name.to_string(),
        });
    };

    let player = Player::from_feed(found);
    db.upsert_player(&player)?;
    println!("✓ Found {} ({})", player.name, player.position);
    Ok(player)
}

fn header_cells(visibility: FamilyVisibility) -> Vec<String> {
    let mut header = vec!["Season".to_string(), "G".to_string()];
    if visibility.passing {
        for h in [
            "Cmp", "Att", "Cmp%", "PassYds", "Y/A", "PassTD", "INT", "Sck", "PassEPA", "PassSR%",
            "CPOE",
        ] {
            header.push(h.to_string());
        }
    }
    if visibility.rushing {
        for h in ["Car", "RushYds", "RushTD", "Y/C", "RushEPA", "RushSR%"] {
            header.push(h.to_string());
        }
    }
    if visibility.receiving {
        for h in ["Tgt", "Rec", "RecYds", "RecTD", "Y/R", "RecEPA", "RecSR%"] {
            header.push(h.to_string());
        }
    }
    header.push("NetEPA".to_string());
    header
}

fn stat_cells(
    passing: &PassingTotals,
    rushing: &RushingTotals,
    receiving: &ReceivingTotals,
    visibility: FamilyVisibility,
) -> Vec<String> {
    let mut cells = Vec::new();

    if visibility.passing {
        cells.push(display_count(Some(passing.completions as i64), false));
        cells.push(display_count(Some(passing.attempts as i64), false));
        cells.push(display_percent(completion_percentage(
            Some(passing.completions),
            Some(passing.attempts),
        )));
        cells.push(display_count(Some(passing.yards), false));
        cells.push(display_value(passing.yards_per_attempt(), false));
        cells.push(display_count(Some(passing.touchdowns as i64), false));
        cells.push(display_count(Some(passing.interceptions as i64), false));
        cells.push(display_count(Some(passing.sacks as i64), false));
        cells.push(display_epa(Some(passing.epa), false));
        cells.push(display_percent(passing.success_rate));
        cells.push(display_value(passing.cpoe, false));
    }
    if visibility.rushing {
        cells.push(display_count(Some(rushing.attempts as i64), false));
        cells.push(display_count(Some(rushing.yards), false));
        cells.push(display_count(Some(rushing.touchdowns as i64), false));
        cells.push(display_value(rushing.yards_per_carry(), false));
        cells.push(display_epa(Some(rushing.epa), false));
        cells.push(display_percent(rushing.success_rate));
    }
    if visibility.receiving {
        cells.push(display_count(Some(receiving.targets as i64), false));
        cells.push(display_count(Some(receiving.receptions as i64), false));
        cells.push(display_count(Some(receiving.yards), false));
        cells.push(display_count(Some(receiving.touchdowns as i64), false));
        cells.push(display_value(receiving.yards_per_reception(), false));
        cells.push(display_epa(Some(receiving.epa), false));
        cells.push(display_percent(receiving.success_rate));
    }

    cells.push(display_epa(
        Some(passing.epa + rushing.epa + receiving.epa),
        false,
    ));
    cells
}

fn render_career_table(
    seasons: &[SeasonAggregate],
    totals: &CareerTotals,
    visibility: FamilyVisibility,
) {
    let header = header_cells(visibility);
    let mut rows: Vec<Vec<String>> = Vec::new();

    for s in seasons {
        let mut row = vec![
            s.season.to_string(),
            display_count(Some(s.game_count as i64), false),
        ];
        row.extend(stat_cells(&s.passing, &s.rushing, &s.receiving, visibility));
        rows.push(row);
    }

    // The totals row keeps a genuine zero games-played visible instead of
    // collapsing it to the no-data marker
    let mut totals_row = vec![
        "Total".to_string(),
        display_count(Some(totals.game_count as i64), true),
    ];
    totals_row.extend(stat_cells(
        &totals.passing,
        &totals.rushing,
        &totals.receiving,
        visibility,
    ));
    rows.push(totals_row);

    print_table(&header, &rows);
}

fn print_table(header: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:>width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", format_row(header));
    for row in rows {
        println!("{}", format_row(row));
    }
}
