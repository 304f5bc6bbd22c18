//! Season aggregation: fold per-game records into one line per season.
//!
//! Aggregation is a pure function of its input. Nothing is cached and
//! nothing is persisted; callers re-run it on every query, which keeps the
//! derived numbers trivially consistent with the stored records.

use crate::cli::types::Season;
use crate::feed::types::GameRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Summed passing stats for one season, with rates derived from the sums.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PassingTotals {
    pub attempts: u32,
    pub completions: u32,
    pub yards: i64,
    pub touchdowns: u32,
    pub interceptions: u32,
    pub sacks: u32,
    pub epa: f64,
    pub epa_per_play: Option<f64>,
    pub success_rate: Option<f64>,
    pub cpoe: Option<f64>,
}

impl PassingTotals {
    /// Yards gained per pass attempt.
    pub fn yards_per_attempt(&self) -> Option<f64> {
        per_unit(self.yards as f64, self.attempts)
    }
}

/// Summed rushing stats for one season.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RushingTotals {
    pub attempts: u32,
    pub yards: i64,
    pub touchdowns: u32,
    pub epa: f64,
    pub epa_per_play: Option<f64>,
    pub success_rate: Option<f64>,
}

impl RushingTotals {
    /// Yards gained per carry.
    pub fn yards_per_carry(&self) -> Option<f64> {
        per_unit(self.yards as f64, self.attempts)
    }
}

/// Summed receiving stats for one season.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReceivingTotals {
    pub targets: u32,
    pub receptions: u32,
    pub yards: i64,
    pub touchdowns: u32,
    pub epa: f64,
    pub epa_per_play: Option<f64>,
    pub success_rate: Option<f64>,
}

impl ReceivingTotals {
    /// Yards gained per catch.
    pub fn yards_per_reception(&self) -> Option<f64> {
        per_unit(self.yards as f64, self.receptions)
    }
}

/// One player-season, derived from that season's game records.
///
/// Never stored; recomputed from [`GameRecord`]s on every query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonAggregate {
    pub season: Season,
    /// Games played. Taken verbatim from a season rollup's `games` value
    /// when one exists for the season, otherwise the count of weekly
    /// records.
    pub game_count: u32,
    pub passing: PassingTotals,
    pub rushing: RushingTotals,
    pub receiving: ReceivingTotals,
}

/// Career sums across every aggregated season. Rate columns are re-derived
/// from the summed counts rather than averaged over seasons.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CareerTotals {
    pub seasons: u32,
    pub game_count: u32,
    pub passing: PassingTotals,
    pub rushing: RushingTotals,
    pub receiving: ReceivingTotals,
}

/// Reduce a player's game records into one aggregate per season, sorted by
/// season descending.
///
/// Summable fields treat a missing value as 0: it contributes nothing but
/// never poisons the rest of the sum. The game count obeys a strict
/// precedence: a season rollup's non-null `games` value wins over the weekly
/// tally no matter where the rollup sits in the input, so the result does
/// not depend on record order. Empty input yields an empty vector.
pub fn aggregate_seasons(records: &[GameRecord]) -> Vec<SeasonAggregate> {
    let mut by_season: BTreeMap<u16, SeasonAccumulator> = BTreeMap::new();

    for record in records {
        by_season
            .entry(record.season.as_u16())
            .or_default()
            .fold(record);
    }

    // BTreeMap iterates ascending; the career table wants newest first.
    by_season
        .into_iter()
        .rev()
        .map(|(year, acc)| acc.finish(Season::new(year)))
        .collect()
}

/// Career totals for a totals row, summed from per-season aggregates.
pub fn career_totals(seasons: &[SeasonAggregate]) -> CareerTotals {
    let mut total = CareerTotals {
        seasons: seasons.len() as u32,
        ..CareerTotals::default()
    };
    let mut pass_sr = RateAcc::default();
    let mut pass_cpoe = RateAcc::default();
    let mut rush_sr = RateAcc::default();
    let mut recv_sr = RateAcc::default();

    for s in seasons {
        total.game_count += s.game_count;

        total.passing.attempts += s.passing.attempts;
        total.passing.completions += s.passing.completions;
        total.passing.yards += s.passing.yards;
        total.passing.touchdowns += s.passing.touchdowns;
        total.passing.interceptions += s.passing.interceptions;
        total.passing.sacks += s.passing.sacks;
        total.passing.epa += s.passing.epa;
        pass_sr.add(s.passing.success_rate, s.passing.attempts);
        pass_cpoe.add(s.passing.cpoe, s.passing.attempts);

        total.rushing.attempts += s.rushing.attempts;
        total.rushing.yards += s.rushing.yards;
        total.rushing.touchdowns += s.rushing.touchdowns;
        total.rushing.epa += s.rushing.epa;
        rush_sr.add(s.rushing.success_rate, s.rushing.attempts);

        total.receiving.targets += s.receiving.targets;
        total.receiving.receptions += s.receiving.receptions;
        total.receiving.yards += s.receiving.yards;
        total.receiving.touchdowns += s.receiving.touchdowns;
        total.receiving.epa += s.receiving.epa;
        recv_sr.add(s.receiving.success_rate, s.receiving.targets);
    }

    total.passing.epa_per_play = per_unit(total.passing.epa, total.passing.attempts);
    total.passing.success_rate = pass_sr.mean();
    total.passing.cpoe = pass_cpoe.mean();
    total.rushing.epa_per_play = per_unit(total.rushing.epa, total.rushing.attempts);
    total.rushing.success_rate = rush_sr.mean();
    total.receiving.epa_per_play = per_unit(total.receiving.epa, total.receiving.targets);
    total.receiving.success_rate = recv_sr.mean();

    total
}

fn per_unit(total: f64, units: u32) -> Option<f64> {
    if units == 0 {
        None
    } else {
        Some(total / units as f64)
    }
}

/// Play-weighted mean for rate stats that cannot be summed across records.
#[derive(Debug, Clone, Copy, Default)]
struct RateAcc {
    weighted_sum: f64,
    weight: f64,
}

impl RateAcc {
    fn add(&mut self, value: Option<f64>, plays: u32) {
        if let Some(v) = value {
            if plays > 0 {
                self.weighted_sum += v * plays as f64;
                self.weight += plays as f64;
            }
        }
    }

    fn mean(&self) -> Option<f64> {
        if self.weight > 0.0 {
            Some(self.weighted_sum / self.weight)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
struct SeasonAccumulator {
    rollup_games: Option<u32>,
    weekly_tally: u32,
    passing: PassingTotals,
    rushing: RushingTotals,
    receiving: ReceivingTotals,
    pass_sr: RateAcc,
    pass_cpoe: RateAcc,
    rush_sr: RateAcc,
    recv_sr: RateAcc,
}

impl SeasonAccumulator {
    fn fold(&mut self, record: &GameRecord) {
        let s = &record.stats;

        // A rollup with a recorded games count is authoritative for the
        // season; weekly records only ever feed the fallback tally.
        match record.week {
            None => {
                if let Some(games) = s.games {
                    self.rollup_games = Some(games);
                }
            }
            Some(_) => self.weekly_tally += 1,
        }

        self.passing.attempts += s.passing_attempts.unwrap_or(0);
        self.passing.completions += s.passing_completions.unwrap_or(0);
        self.passing.yards += s.passing_yards.unwrap_or(0);
        self.passing.touchdowns += s.passing_touchdowns.unwrap_or(0);
        self.passing.interceptions += s.passing_interceptions.unwrap_or(0);
        self.passing.sacks += s.passing_sacks.unwrap_or(0);
        self.passing.epa += s.passing_epa.unwrap_or(0.0);
        self.pass_sr
            .add(s.passing_success_rate, s.passing_attempts.unwrap_or(0));
        self.pass_cpoe.add(s.cpoe, s.passing_attempts.unwrap_or(0));

        self.rushing.attempts += s.rushing_attempts.unwrap_or(0);
        self.rushing.yards += s.rushing_yards.unwrap_or(0);
        self.rushing.touchdowns += s.rushing_touchdowns.unwrap_or(0);
        self.rushing.epa += s.rushing_epa.unwrap_or(0.0);
        self.rush_sr
            .add(s.rushing_success_rate, s.rushing_attempts.unwrap_or(0));

        self.receiving.targets += s.targets.unwrap_or(0);
        self.receiving.receptions += s.receptions.unwrap_or(0);
        self.receiving.yards += s.receiving_yards.unwrap_or(0);
        self.receiving.touchdowns += s.receiving_touchdowns.unwrap_or(0);
        self.receiving.epa += s.receiving_epa.unwrap_or(0.0);
        self.recv_sr
            .add(s.receiving_success_rate, s.targets.unwrap_or(0));
    }

    fn finish(mut self, season: Season) -> SeasonAggregate {
        self.passing.epa_per_play = per_unit(self.passing.epa, self.passing.attempts);
        self.passing.success_rate = self.pass_sr.mean();
        self.passing.cpoe = self.pass_cpoe.mean();
        self.rushing.epa_per_play = per_unit(self.rushing.epa, self.rushing.attempts);
        self.rushing.success_rate = self.rush_sr.mean();
        self.receiving.epa_per_play = per_unit(self.receiving.epa, self.receiving.targets);
        self.receiving.success_rate = self.recv_sr.mean();

        SeasonAggregate {
            season,
            game_count: self.rollup_games.unwrap_or(self.weekly_tally),
            passing: self.passing,
            rushing: self.rushing,
            receiving: self.receiving,
        }
    }
}
