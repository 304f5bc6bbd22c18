//! Position-conditional stat family visibility.
//!
//! The career table only shows the stat families that make sense for a
//! player's position: quarterbacks get passing columns, everyone else gets
//! receiving columns, and rushing columns appear for quarterbacks only when
//! they actually ran the ball. Positions come in as the free-form strings
//! the database stores, so an unrecognized position simply behaves as
//! "not a quarterback" rather than erroring.

use crate::stats::aggregate::SeasonAggregate;


/// Whether the passing family is shown. Quarterbacks only.
pub fn shows_passing(position: &str) -> bool {
    position == "QB"
}

/// Whether the receiving family is shown. Everyone but quarterbacks.
pub fn shows_receiving(position: &str) -> bool {
    position != "QB"
}

/// Whether the rushing family is shown.
///
/// Non-quarterbacks always get rushing columns. For quarterbacks the
/// decision is data-driven: a scrambler with recorded carries grows the
/// extra column family, a pure pocket passer does not.
pub fn shows_rushing(position: &str, seasons: &[SeasonAggregate]) -> bool {
    if position != "QB" {
        return true;
    }
    seasons.iter().any(|s| s.rushing.attempts > 0)
}

/// The three independent visibility flags, bundled for table rendering
/// and JSON export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FamilyVisibility {
    pub passing: bool,
    pub rushing: bool,
    pub receiving: bool,
}

impl FamilyVisibility {
    pub fn for_player(position: &str, seasons: &[SeasonAggregate]) -> Self {
        Self {
            passing: shows_passing(position),
            rushing: shows_rushing(position, seasons),
            receiving: shows_receiving(position),
        }
    }
}
