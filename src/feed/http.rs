//! HTTP access to the upstream stats API.

use reqwest::Client;
use serde_json::Value;

use crate::cli::types::PlayerId;
use crate::feed::types::FeedPlayer;
use crate::Result;

/// Cache disposition of a fetched payload, reported back to verbose callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

fn api_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Fetch the raw game-record array for one player.
///
/// Returns the payload untyped; record validation happens at the ingestion
/// boundary so one malformed row cannot fail the whole fetch.
pub async fn get_player_records(debug: bool, base_url: &str, player_id: PlayerId) -> Result<Value> {
    let url = api_url(base_url, &format!("/api/players/{}/stats", player_id));
    if debug {
        eprintln!("DEBUG: GET {url}");
    }

    let res = Client::new()
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

/// Search the player directory by name substring.
pub async fn search_players(debug: bool, base_url: &str, query: &str) -> Result<Vec<FeedPlayer>> {
    let url = api_url(base_url, "/api/players");
    let params = [("search", query)];
    if debug {
        eprintln!("DEBUG: GET {url}?search={query}");
    }

    let res = Client::new()
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(serde_json::from_value(res)?)
}

/// Fetch the full player directory, untyped for caching.
pub async fn get_player_directory(debug: bool, base_url: &str) -> Result<Value> {
    let url = api_url(base_url, "/api/players");
    if debug {
        eprintln!("DEBUG: GET {url}");
    }

    let res = Client::new()
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}
