//! Database schema and connection management

use crate::core::cache::cache_base_dir;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for player data
pub struct PlayerDatabase {
    pub(crate) conn: Connection,
}

impl PlayerDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path();

        // Ensure the cache directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::open(Connection::open(&db_path)?)
    }

    /// Open a database at a specific path (used by tests)
    pub fn with_path(path: &Path) -> Result<Self> {
        Self::open(Connection::open(path)?)
    }

    /// Open a transient in-memory database (used by tests)
    pub fn new_in_memory() -> Result<Self> {
        Self::open(Connection::open_in_memory()?)
    }

    fn open(conn: Connection) -> Result<Self> {
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Path to the database file: `~/.cache/nfl-stats/stats.db`
    fn database_path() -> PathBuf {
        cache_base_dir().join("stats.db")
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Create players table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                pfr_id TEXT,
                name TEXT NOT NULL,
                position TEXT NOT NULL,
                team TEXT
            )",
            [],
        )?;

        // Create game_stats table. `week` is NULL for season-level rollups,
        // so uniqueness needs the COALESCE expression index below instead of
        // a plain primary key (NULLs never compare equal in a UNIQUE column).
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS game_stats (
                player_id INTEGER NOT NULL,
                season INTEGER NOT NULL,
                week INTEGER,
                games INTEGER,
                passing_attempts INTEGER,
                passing_completions INTEGER,
                passing_yards INTEGER,
                passing_touchdowns INTEGER,
                passing_interceptions INTEGER,
                passing_sacks INTEGER,
                passing_epa REAL,
                passing_epa_per_play REAL,
                passing_success_rate REAL,
                cpoe REAL,
                rushing_attempts INTEGER,
                rushing_yards INTEGER,
                rushing_touchdowns INTEGER,
                rushing_epa REAL,
                rushing_epa_per_play REAL,
                rushing_success_rate REAL,
                targets INTEGER,
                receptions INTEGER,
                receiving_yards INTEGER,
                receiving_touchdowns INTEGER,
                receiving_epa REAL,
                receiving_epa_per_play REAL,
                receiving_success_rate REAL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (player_id) REFERENCES players(player_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_game_stats_key
             ON game_stats(player_id, season, COALESCE(week, -1))",
            [],
        )?;

        // Index for season-wide scans (leaderboards)
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_game_stats_season
             ON game_stats(season)",
            [],
        )?;

        Ok(())
    }
}
