//! ID types for NFL statistics.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player IDs as assigned by the upstream stats API.
///
/// Ensures player IDs are handled consistently throughout the application
/// and provides type safety to prevent mixing up player IDs with other
/// numeric values.
///
/// # Examples
///
/// ```rust
/// use nfl_stats::PlayerId;
///
/// let player_id = PlayerId::new(4881);
/// assert_eq!(player_id.as_u64(), 4881);
/// assert_eq!(player_id.to_string(), "4881");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new PlayerId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
