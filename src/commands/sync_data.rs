//! Bulk synchronization of players and game records from the stats API.
//!
//! Populates the local database so lookups and leaderboards work offline.
//! Records are insert-or-ignore by default; `--refresh` re-fetches and
//! overwrites, which is how corrected upstream data gets picked up.

use crate::{
    commands::common::{fetch_records_with_message, resolve_api_base},
    feed::cache_records::load_or_fetch_player_directory,
    feed::http::{search_players, CacheStatus},
    feed::types::FeedPlayer,
    storage::{Player, PlayerDatabase},
    Result,
};

/// Configuration parameters for the sync command.
#[derive(Debug)]
pub struct SyncDataParams {
    pub debug: bool,
    pub api_url: Option<String>,
    pub player_names: Option<Vec<String>>,
    pub all: bool,
    pub refresh: bool,
    pub verbose: bool,
}

/// Fetch players (named, or the whole directory) and store their records.
pub async fn handle_sync_data(params: SyncDataParams) -> Result<()> {
    let base_url = resolve_api_base(params.api_url.clone())?;
    println!("Connecting to database...");
    let mut db = PlayerDatabase::new()?;

    let targets = collect_targets(&params, &base_url).await?;
    if targets.is_empty() {
        println!("⚠ Nothing to sync (no matching players)");
        return Ok(());
    }

    println!("Syncing {} players...", targets.len());

    let mut synced_players = 0;
    let mut new_records = 0;

    for feed_player in targets {
        let player = Player::from_feed(feed_player);
        db.upsert_player(&player)?;

        let records = match fetch_records_with_message(
            params.debug,
            &base_url,
            player.player_id,
            &player.name,
            params.refresh,
            params.verbose,
        )
        .await
        {
            Ok(records) => records,
            Err(e) => {
                // One unreachable player should not sink a bulk sync
                println!("⚠ Could not fetch records for {}: {}", player.name, e);
                continue;
            }
        };

        let mut stored = 0;
        for record in &records {
            if db.upsert_game_record(player.player_id, record, params.refresh)? {
                stored += 1;
            }
        }

        if params.verbose {
            println!(
                "✓ {}: {} records ({} new)",
                player.name,
                records.len(),
                stored
            );
        }

        synced_players += 1;
        new_records += stored;
    }

    println!(
        "✓ Synced {} players, {} new records",
        synced_players, new_records
    );
    Ok(())
}

async fn collect_targets(params: &SyncDataParams, base_url: &str) -> Result<Vec<FeedPlayer>> {
    if params.all {
        let (players, cache_status) =
            load_or_fetch_player_directory(params.debug, base_url, params.refresh).await?;
        if params.verbose {
            match cache_status {
                CacheStatus::Hit => println!("✓ Player directory loaded (from cache)"),
                CacheStatus::Miss => println!("✓ Player directory fetched (cache miss)"),
                CacheStatus::Refreshed => println!("✓ Player directory fetched (refreshed)"),
            }
        }
        return Ok(players);
    }

    let mut targets = Vec::new();
    for name in params.player_names.iter().flatten() {
        let matches = search_players(params.debug, base_url, name).await?;
        if matches.is_empty() {
            println!("⚠ No player matching {:?}", name);
            continue;
        }
        targets.extend(matches);
    }

    // A name matching twice (or two filters matching the same player)
    // should not sync the player twice
    targets.sort_by_key(|p| p.id);
    targets.dedup_by_key(|p| p.id);
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_params_creation() {
        let params = SyncDataParams {
            debug: false,
            api_url: Some("http://localhost:3001".to_string()),
            player_names: Some(vec!["Hurts".to_string(), "Barkley".to_string()]),
            all: false,
            refresh: true,
            verbose: true,
        };

        assert!(!params.all);
        assert!(params.refresh);
        assert_eq!(params.player_names.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_sync_params_all_mode() {
        let params = SyncDataParams {
            debug: false,
            api_url: None,
            player_names: None,
            all: true,
            refresh: false,
            verbose: false,
        };

        assert!(params.all);
        assert!(params.player_names.is_none());
    }
}
