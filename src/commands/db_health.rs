//! Database health reporting.

use crate::{storage::PlayerDatabase, Result};

/// Run duplicate and coverage checks and print the verdict.
pub fn handle_health(as_json: bool) -> Result<()> {
    let db = PlayerDatabase::new()?;
    let report = db.health_report()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "=".repeat(60));
    println!("DATABASE HEALTH CHECK");
    println!("{}", "=".repeat(60));
    println!("Total players:          {}", report.total_players);
    println!("Players with stats:     {}", report.players_with_stats);
    println!(
        "Duplicate pfr_ids:      {} {}",
        report.duplicate_pfr_ids,
        if report.duplicate_pfr_ids == 0 { "✓" } else { "⚠" }
    );
    println!(
        "Duplicate names:        {} (different players OK)",
        report.duplicate_names
    );

    if !report.season_counts.is_empty() {
        println!("Records by season:");
        for (season, count) in &report.season_counts {
            println!("  {}: {}", season, count);
        }
    }

    println!("{}", "=".repeat(60));
    if report.is_healthy() {
        println!("✓ Database is healthy!");
    } else {
        println!("⚠ Issues detected - re-run sync with --refresh");
    }

    Ok(())
}
