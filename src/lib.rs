//! NFL Season Statistics CLI Library
//!
//! A Rust library and CLI for browsing NFL player statistics served by an
//! ingestion-fed stats API, with local SQLite storage and season-level
//! aggregation.
//!
//! ## Features
//!
//! - **Season Aggregation**: Fold per-game records into per-season lines,
//!   with season rollups taking precedence over weekly tallies
//! - **Position-Aware Tables**: Stat families (passing/rushing/receiving)
//!   shown based on the player's position and actual usage
//! - **Database Storage**: Local mirror of players and game records
//! - **Leaderboards**: Rank the stored population by counting stats
//! - **Health Checks**: Duplicate and coverage reporting on the mirror
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_stats::commands::player_stats::*;
//!
//! # async fn example() -> nfl_stats::Result<()> {
//! // Print a career table for a player
//! let params = PlayerStatsParams {
//!     player_name: "Jalen Hurts".to_string(),
//!     season: None,
//!     // ... other parameters
//! #   debug: false,
//! #   as_json: false,
//! #   api_url: None,
//! #   refresh: false,
//! #   clear_db: false,
//! };
//!
//! handle_player_stats(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the stats API base URL to avoid passing it in every command:
//! ```bash
//! export NFL_STATS_API_URL=http://localhost:3001
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod feed;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeaderStat, PlayerId, Position, Season, Week};
pub use error::{Result, StatsError};
pub use feed::types::{GameRecord, StatLine};
pub use stats::{aggregate_seasons, career_totals, FamilyVisibility, SeasonAggregate};

pub const API_URL_ENV_VAR: &str = "NFL_STATS_API_URL";
