//! Common utilities and helper functions shared across commands.

use crate::{
    cli::types::PlayerId,
    commands::record_filters::filter_and_convert_records,
    feed::{cache_records::load_or_fetch_player_records, http::CacheStatus, types::GameRecord},
    Result, StatsError, API_URL_ENV_VAR,
};

/// Resolve the stats API base URL from the CLI flag or the environment.
pub fn resolve_api_base(api_url: Option<String>) -> Result<String> {
    match api_url {
        Some(url) => Ok(url),
        None => std::env::var(API_URL_ENV_VAR).map_err(|_| StatsError::MissingApiUrl {
            env_var: API_URL_ENV_VAR.to_string(),
        }),
    }
}

/// Fetch and validate a player's game records, reporting the cache
/// disposition when verbose.
pub async fn fetch_records_with_message(
    debug: bool,
    base_url: &str,
    player_id: PlayerId,
    player_name: &str,
    refresh: bool,
    verbose: bool,
) -> Result<Vec<GameRecord>> {
    let (raw, cache_status) =
        load_or_fetch_player_records(debug, base_url, player_id, refresh).await?;

    if verbose {
        match cache_status {
            CacheStatus::Hit => {
                println!("✓ Game records for {} loaded (from cache)", player_name)
            }
            CacheStatus::Miss => {
                println!("✓ Game records for {} fetched (cache miss)", player_name)
            }
            CacheStatus::Refreshed => {
                println!("✓ Game records for {} fetched (refreshed)", player_name)
            }
        }
    }

    Ok(filter_and_convert_records(raw))
}
