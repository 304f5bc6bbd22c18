//! Basic database query operations

use super::{models::*, schema::PlayerDatabase};
use crate::cli::types::{PlayerId, Position, Season, Week};
use crate::feed::types::{GameRecord, StatLine};
use anyhow::Result;
use rusqlite::{params, Row};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stat column list shared by inserts and selects; order matters and must
/// match `row_to_game_record`.
const STAT_COLUMNS: &str = "games, \
     passing_attempts, passing_completions, passing_yards, passing_touchdowns, \
     passing_interceptions, passing_sacks, passing_epa, passing_epa_per_play, \
     passing_success_rate, cpoe, \
     rushing_attempts, rushing_yards, rushing_touchdowns, rushing_epa, \
     rushing_epa_per_play, rushing_success_rate, \
     targets, receptions, receiving_yards, receiving_touchdowns, \
     receiving_epa, receiving_epa_per_play, receiving_success_rate";

impl PlayerDatabase {
    /// Insert or update a player's basic information
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players (player_id, pfr_id, name, position, team)
             VALUES (?, ?, ?, ?, ?)",
            params![
                player.player_id.as_u64(),
                player.pfr_id,
                player.name,
                player.position,
                player.team
            ],
        )?;
        Ok(())
    }

    /// Insert or update one game record for a player.
    /// Without `force_update`, an existing row for the same
    /// (player, season, week) key is left untouched.
    pub fn upsert_game_record(
        &mut self,
        player_id: PlayerId,
        record: &GameRecord,
        force_update: bool,
    ) -> Result<bool> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let week = record.week.map(|w| w.as_u16());
        let s = &record.stats;

        let sql = if force_update {
            format!(
                "INSERT OR REPLACE INTO game_stats
                 (player_id, season, week, {STAT_COLUMNS}, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                         COALESCE((SELECT created_at FROM game_stats
                                   WHERE player_id = ?1 AND season = ?2
                                     AND COALESCE(week, -1) = COALESCE(?3, -1)), ?28), ?28)"
            )
        } else {
            format!(
                "INSERT OR IGNORE INTO game_stats
                 (player_id, season, week, {STAT_COLUMNS}, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?28, ?28)"
            )
        };

        let rows_affected = self.conn.execute(
            &sql,
            params![
                player_id.as_u64(),
                record.season.as_u16(),
                week,
                s.games,
                s.passing_attempts,
                s.passing_completions,
                s.passing_yards,
                s.passing_touchdowns,
                s.passing_interceptions,
                s.passing_sacks,
                s.passing_epa,
                s.passing_epa_per_play,
                s.passing_success_rate,
                s.cpoe,
                s.rushing_attempts,
                s.rushing_yards,
                s.rushing_touchdowns,
                s.rushing_epa,
                s.rushing_epa_per_play,
                s.rushing_success_rate,
                s.targets,
                s.receptions,
                s.receiving_yards,
                s.receiving_touchdowns,
                s.receiving_epa,
                s.receiving_epa_per_play,
                s.receiving_success_rate,
                now
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get every stored record for a player, newest season first.
    pub fn get_player_records(&self, player_id: PlayerId) -> Result<Vec<GameRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT season, week, {STAT_COLUMNS}
             FROM game_stats
             WHERE player_id = ?
             ORDER BY season DESC, week"
        ))?;

        let rows = stmt.query_map(params![player_id.as_u64()], |row| {
            Self::row_to_game_record(row)
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Get a player's records for one season.
    pub fn get_player_season_records(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<Vec<GameRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT season, week, {STAT_COLUMNS}
             FROM game_stats
             WHERE player_id = ? AND season = ?
             ORDER BY week"
        ))?;

        let rows = stmt.query_map(params![player_id.as_u64(), season.as_u16()], |row| {
            Self::row_to_game_record(row)
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Check whether any records exist for a player.
    pub fn has_records_for_player(&self, player_id: PlayerId) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM game_stats WHERE player_id = ?",
            params![player_id.as_u64()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Find a stored player by name (substring match, case-insensitive via
    /// LIKE). Exact matches win over partial ones.
    pub fn find_player_by_name(&self, name: &str) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, pfr_id, name, position, team
             FROM players
             WHERE name LIKE ?
             ORDER BY (name = ?) DESC, name
             LIMIT 1",
        )?;

        let result = stmt.query_row(params![format!("%{}%", name), name], Self::row_to_player);

        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all players from the database
    pub fn get_all_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, pfr_id, name, position, team FROM players ORDER BY name",
        )?;

        let rows = stmt.query_map([], Self::row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Get players, optionally restricted to a set of positions.
    pub fn get_players_by_positions(
        &self,
        positions: Option<&Vec<Position>>,
    ) -> Result<Vec<Player>> {
        let mut query =
            String::from("SELECT player_id, pfr_id, name, position, team FROM players");
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(pos_list) = positions {
            if !pos_list.is_empty() {
                query.push_str(" WHERE position IN (");
                for (i, pos) in pos_list.iter().enumerate() {
                    if i > 0 {
                        query.push_str(", ");
                    }
                    query.push('?');
                    params.push(Box::new(pos.to_string()));
                }
                query.push(')');
            }
        }

        query.push_str(" ORDER BY name");

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            Self::row_to_player,
        )?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        // Delete all data from both tables (game stats first due to foreign key)
        self.conn.execute("DELETE FROM game_stats", [])?;
        self.conn.execute("DELETE FROM players", [])?;
        Ok(())
    }

    fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            player_id: PlayerId::new(row.get(0)?),
            pfr_id: row.get(1)?,
            name: row.get(2)?,
            position: row.get(3)?,
            team: row.get(4)?,
        })
    }

    /// Helper to convert a database row (season, week, stat columns in
    /// `STAT_COLUMNS` order) into a GameRecord
    pub(crate) fn row_to_game_record(row: &Row) -> rusqlite::Result<GameRecord> {
        let week: Option<u16> = row.get(1)?;
        Ok(GameRecord {
            season: Season::new(row.get(0)?),
            week: week.map(Week::new),
            stats: StatLine {
                games: row.get(2)?,
                passing_attempts: row.get(3)?,
                passing_completions: row.get(4)?,
                passing_yards: row.get(5)?,
                passing_touchdowns: row.get(6)?,
                passing_interceptions: row.get(7)?,
                passing_sacks: row.get(8)?,
                passing_epa: row.get(9)?,
                passing_epa_per_play: row.get(10)?,
                passing_success_rate: row.get(11)?,
                cpoe: row.get(12)?,
                rushing_attempts: row.get(13)?,
                rushing_yards: row.get(14)?,
                rushing_touchdowns: row.get(15)?,
                rushing_epa: row.get(16)?,
                rushing_epa_per_play: row.get(17)?,
                rushing_success_rate: row.get(18)?,
                targets: row.get(19)?,
                receptions: row.get(20)?,
                receiving_yards: row.get(21)?,
                receiving_touchdowns: row.get(22)?,
                receiving_epa: row.get(23)?,
                receiving_epa_per_play: row.get(24)?,
                receiving_success_rate: row.get(25)?,
            },
        })
    }
}
