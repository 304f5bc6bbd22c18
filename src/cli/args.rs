//! CLI argument definitions and parsing structures.

use super::types::{position::Position, stat::LeaderStat, time::Season};
use clap::{Args, Parser, Subcommand};

/// Common connection arguments shared by commands that may hit the feed
#[derive(Debug, Args)]
pub struct ApiOpts {
    /// Stats API base URL (or set `NFL_STATS_API_URL` env var).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Print request URLs for debugging.
    #[clap(long)]
    pub debug: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "nfl-stats", about = "NFL season statistics CLI")]
pub struct NflStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query player statistics.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Fetch players and game records from the stats API into the local
    /// database.
    ///
    /// Populates the database so lookups and leaderboards work without
    /// re-hitting the API. Existing records are kept unless `--refresh`.
    Sync {
        #[clap(flatten)]
        api: ApiOpts,

        /// Player name to sync (repeatable): `-n Hurts -n Barkley`.
        #[clap(long, short = 'n')]
        player_name: Option<Vec<String>>,

        /// Sync every player in the feed directory.
        #[clap(long, conflicts_with = "player_name")]
        all: bool,

        /// Force refresh from the stats API even if records exist.
        #[clap(long)]
        refresh: bool,

        /// Show per-player progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Check the local database for duplicates and coverage gaps.
    Health {
        /// Output the report as JSON instead of text.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Get a player's career statistics, one line per season.
    ///
    /// Per-season numbers are recomputed from stored game records on every
    /// run. Which stat families appear depends on the player's position;
    /// quarterbacks only grow rushing columns once they have a recorded
    /// carry.
    PlayerStats {
        #[clap(flatten)]
        api: ApiOpts,

        /// Player name (substring match).
        #[clap(long, short = 'n')]
        player_name: String,

        /// Restrict output to a single season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Force refresh from the stats API even if records are stored.
        #[clap(long)]
        refresh: bool,

        /// Clear all data from the database before fetching (useful for starting fresh)
        #[clap(long)]
        clear_db: bool,
    },

    /// Rank stored players by a counting stat for one season.
    ///
    /// Reads only the local database; run `sync --all` first for full
    /// coverage.
    SeasonLeaders {
        /// Season year (e.g. 2025).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Stat to rank by.
        #[clap(long, value_enum)]
        stat: LeaderStat,

        /// Filter by position (repeatable): `-p QB -p RB`.
        #[clap(short = 'p', long = "position", value_parser = clap::value_parser!(Position))]
        positions: Option<Vec<Position>>,

        /// Number of rows to show.
        #[clap(long, default_value_t = 20)]
        limit: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
