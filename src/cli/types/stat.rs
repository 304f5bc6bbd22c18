//! Stat-selection types for leaderboard commands.

use crate::stats::aggregate::SeasonAggregate;
use std::fmt;

/// Counting stat a season leaderboard can be ranked by.
///
/// Each variant maps onto one summed field of a [`SeasonAggregate`];
/// rate stats are not rankable here because their sort order is
/// meaningless for players with a handful of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LeaderStat {
    /// Passing yards
    PassingYards,
    /// Passing touchdowns
    PassingTds,
    /// Rushing yards
    RushingYards,
    /// Rushing touchdowns
    RushingTds,
    /// Receiving yards
    ReceivingYards,
    /// Receiving touchdowns
    ReceivingTds,
    /// Receptions
    Receptions,
}

impl LeaderStat {
    /// Pull the ranked value out of a season aggregate.
    pub fn value_of(&self, agg: &SeasonAggregate) -> i64 {
        match self {
            LeaderStat::PassingYards => agg.passing.yards,
            LeaderStat::PassingTds => agg.passing.touchdowns as i64,
            LeaderStat::RushingYards => agg.rushing.yards,
            LeaderStat::RushingTds => agg.rushing.touchdowns as i64,
            LeaderStat::ReceivingYards => agg.receiving.yards,
            LeaderStat::ReceivingTds => agg.receiving.touchdowns as i64,
            LeaderStat::Receptions => agg.receiving.receptions as i64,
        }
    }
}

impl fmt::Display for LeaderStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaderStat::PassingYards => "Passing Yards",
            LeaderStat::PassingTds => "Passing TDs",
            LeaderStat::RushingYards => "Rushing Yards",
            LeaderStat::RushingTds => "Rushing TDs",
            LeaderStat::ReceivingYards => "Receiving Yards",
            LeaderStat::ReceivingTds => "Receiving TDs",
            LeaderStat::Receptions => "Receptions",
        };
        write!(f, "{}", s)
    }
}
