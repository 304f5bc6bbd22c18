//! Database consistency reporting

use super::schema::PlayerDatabase;
use anyhow::Result;
use serde::Serialize;

/// Snapshot of database health, surfaced by `nfl-stats health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub total_players: u32,
    pub players_with_stats: u32,
    /// Distinct pfr_ids appearing on more than one player. Always a bug on
    /// the ingestion side; record joins silently double-count when present.
    pub duplicate_pfr_ids: u32,
    /// Distinct names appearing on more than one player. Usually two real
    /// players sharing a name, so reported but not treated as unhealthy.
    pub duplicate_names: u32,
    /// (season, record count) pairs, newest season first.
    pub season_counts: Vec<(u16, u32)>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.duplicate_pfr_ids == 0
    }
}

impl PlayerDatabase {
    /// Run the duplicate and coverage checks across the whole database.
    pub fn health_report(&self) -> Result<HealthReport> {
        let total_players: u32 =
            self.conn
                .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;

        let players_with_stats: u32 = self.conn.query_row(
            "SELECT COUNT(DISTINCT player_id) FROM game_stats",
            [],
            |row| row.get(0),
        )?;

        let duplicate_pfr_ids: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM (
                 SELECT pfr_id FROM players
                 WHERE pfr_id IS NOT NULL
                 GROUP BY pfr_id HAVING COUNT(*) > 1
             )",
            [],
            |row| row.get(0),
        )?;

        let duplicate_names: u32 = self.conn.query_row(
            "SELECT COUNT(*) FROM (
                 SELECT name FROM players
                 GROUP BY name HAVING COUNT(*) > 1
             )",
            [],
            |row| row.get(0),
        )?;

        let mut stmt = self.conn.prepare(
            "SELECT season, COUNT(*) FROM game_stats
             GROUP BY season ORDER BY season DESC",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, u16>(0)?, row.get::<_, u32>(1)?)))?;

        let mut season_counts = Vec::new();
        for row in rows {
            season_counts.push(row?);
        }

        Ok(HealthReport {
            total_players,
            players_with_stats,
            duplicate_pfr_ids,
            duplicate_names,
            season_counts,
        })
    }
}
