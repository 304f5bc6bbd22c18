//! Player position types and utilities.

use crate::error::StatsError;
use std::fmt;
use std::str::FromStr;

/// NFL player positions tracked by the stats database.
///
/// The database stores a player's position as a free-form string (the
/// ingestion side occasionally emits values like "FB" or "HB"); this enum
/// covers the positions the CLI accepts as filters. Display logic that must
/// tolerate arbitrary position strings works on `&str` instead (see
/// [`crate::stats::visibility`]).
///
/// # Examples
///
/// ```rust
/// use nfl_stats::Position;
///
/// let qb: Position = "qb".parse().unwrap();
/// assert_eq!(qb, Position::QB);
/// assert_eq!(qb.to_string(), "QB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// Get the canonical database string for this position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }

    /// All positions the CLI can filter on.
    pub fn all() -> [Position; 4] {
        [Position::QB, Position::RB, Position::WR, Position::TE]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            // HB/FB carry ball-carrier stats; the database files them as RB
            "RB" | "HB" | "FB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            _ => Err(StatsError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
