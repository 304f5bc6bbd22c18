//! Load-or-fetch wrappers around the feed endpoints.
//!
//! Raw payloads are cached as JSON (memory LRU + disk) keyed by player, so
//! browsing the same player twice costs one HTTP round trip. `refresh`
//! bypasses and rewrites the cache.

use serde_json::Value;

use crate::cli::types::PlayerId;
use crate::core::cache::{PlayerDirectoryCacheKey, PlayerRecordsCacheKey, GLOBAL_CACHE};
use crate::feed::http::{self, CacheStatus};
use crate::feed::types::{FeedPlayer, RawGameRecord};
use crate::Result;

/// Try the cache first; on miss (or `refresh == true`) fetch the player's
/// records from the feed and re-write the cache.
pub async fn load_or_fetch_player_records(
    debug: bool,
    base_url: &str,
    player_id: PlayerId,
    refresh: bool,
) -> Result<(Vec<RawGameRecord>, CacheStatus)> {
    let key = PlayerRecordsCacheKey { player_id };

    if !refresh {
        if let Some(cached) = GLOBAL_CACHE.player_records.get(&key) {
            if let Ok(records) = parse_records(&cached) {
                return Ok((records, CacheStatus::Hit));
            }
            // Unparseable cache entry: drop it and fall through to a fetch
            let _ = GLOBAL_CACHE.player_records.invalidate_disk_cache(&key);
        }
    }

    let payload = http::get_player_records(debug, base_url, player_id).await?;
    let records = parse_records(&payload)?;
    GLOBAL_CACHE.player_records.put(key, payload);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((records, status))
}

/// Cached fetch of the full player directory.
pub async fn load_or_fetch_player_directory(
    debug: bool,
    base_url: &str,
    refresh: bool,
) -> Result<(Vec<FeedPlayer>, CacheStatus)> {
    let key = PlayerDirectoryCacheKey;

    if !refresh {
        if let Some(cached) = GLOBAL_CACHE.player_directory.get(&key) {
            if let Ok(players) = serde_json::from_value::<Vec<FeedPlayer>>(cached) {
                return Ok((players, CacheStatus::Hit));
            }
            let _ = GLOBAL_CACHE.player_directory.invalidate_disk_cache(&key);
        }
    }

    let payload = http::get_player_directory(debug, base_url).await?;
    let players: Vec<FeedPlayer> = serde_json::from_value(payload.clone())?;
    GLOBAL_CACHE.player_directory.put(key, payload);

    let status = if refresh {
        CacheStatus::Refreshed
    } else {
        CacheStatus::Miss
    };
    Ok((players, status))
}

fn parse_records(payload: &Value) -> Result<Vec<RawGameRecord>> {
    Ok(serde_json::from_value(payload.clone())?)
}
