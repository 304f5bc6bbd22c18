//! Data models for the storage layer

use crate::cli::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Player information stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    /// External pro-football-reference id; used by the health check to
    /// catch ingestion-side duplicates.
    pub pfr_id: Option<String>,
    pub name: String,
    pub position: String,
    pub team: Option<String>,
}

impl Player {
    /// Build a stored player from a feed directory entry. A missing
    /// position is stored as "UNKNOWN" so visibility logic falls through
    /// to the non-QB branches.
    pub fn from_feed(player: crate::feed::types::FeedPlayer) -> Self {
        Self {
            player_id: player.id,
            pfr_id: player.pfr_id,
            name: player.name,
            position: player.position.unwrap_or_else(|| "UNKNOWN".to_string()),
            team: player.team,
        }
    }
}
