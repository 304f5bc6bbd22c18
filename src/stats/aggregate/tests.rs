//! Unit tests for season aggregation logic

use super::*;
use crate::feed::types::GameRecord;

fn weekly(season: u16, week: u16) -> GameRecord {
    GameRecord::test_weekly(season, week)
}

fn season_level(season: u16, games: Option<u32>) -> GameRecord {
    GameRecord::test_season_level(season, games)
}

#[test]
fn test_empty_input_yields_empty_output() {
    let aggregates = aggregate_seasons(&[]);
    assert!(aggregates.is_empty());
}

#[test]
fn test_sum_invariant_single_season() {
    let mut week1 = weekly(2024, 1);
    week1.stats.passing_yards = Some(200);
    week1.stats.passing_touchdowns = Some(2);
    week1.stats.passing_attempts = Some(30);

    let mut week2 = weekly(2024, 2);
    week2.stats.passing_yards = Some(150);
    week2.stats.passing_attempts = Some(25);

    let aggregates = aggregate_seasons(&[week1, week2]);
    assert_eq!(aggregates.len(), 1);

    let agg = &aggregates[0];
    assert_eq!(agg.season.as_u16(), 2024);
    assert_eq!(agg.passing.yards, 350);
    assert_eq!(agg.passing.attempts, 55);
    assert_eq!(agg.passing.touchdowns, 2);
}

#[test]
fn test_missing_values_count_as_zero_without_poisoning_sums() {
    let mut week1 = weekly(2024, 1);
    week1.stats.rushing_yards = Some(80);
    week1.stats.rushing_attempts = Some(15);

    // Week 2 has no rushing data recorded at all
    let week2 = weekly(2024, 2);

    let mut week3 = weekly(2024, 3);
    week3.stats.rushing_yards = Some(-4);
    week3.stats.rushing_attempts = Some(2);

    let aggregates = aggregate_seasons(&[week1, week2, week3]);
    let agg = &aggregates[0];

    // Nulls contribute nothing; negative yardage still sums through
    assert_eq!(agg.rushing.yards, 76);
    assert_eq!(agg.rushing.attempts, 17);
    assert_eq!(agg.game_count, 3);
}

#[test]
fn test_season_partitioning_sorted_descending() {
    let mut a = weekly(2023, 1);
    a.stats.receiving_yards = Some(50);
    let mut b = weekly(2024, 1);
    b.stats.receiving_yards = Some(70);
    let mut c = weekly(2023, 2);
    c.stats.receiving_yards = Some(30);

    let aggregates = aggregate_seasons(&[a, b, c]);
    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].season.as_u16(), 2024);
    assert_eq!(aggregates[1].season.as_u16(), 2023);
    assert_eq!(aggregates[0].receiving.yards, 70);
    assert_eq!(aggregates[1].receiving.yards, 80);
}

#[test]
fn test_game_count_from_season_rollup() {
    let mut rollup = season_level(2022, Some(17));
    rollup.stats.passing_yards = Some(4000);

    let aggregates = aggregate_seasons(&[rollup]);
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].game_count, 17);
    assert_eq!(aggregates[0].passing.yards, 4000);
}

#[test]
fn test_game_count_from_weekly_tally() {
    let records = vec![weekly(2024, 1), weekly(2024, 2), weekly(2024, 3)];
    let aggregates = aggregate_seasons(&records);
    assert_eq!(aggregates[0].game_count, 3);
}

#[test]
fn test_rollup_games_win_regardless_of_order() {
    let mut rollup = season_level(2024, Some(16));
    rollup.stats.passing_yards = Some(3800);
    let weeks = vec![weekly(2024, 1), weekly(2024, 2)];

    // Rollup first
    let mut records = vec![rollup.clone()];
    records.extend(weeks.clone());
    let first = aggregate_seasons(&records);
    assert_eq!(first[0].game_count, 16);

    // Rollup last; the weekly tally must not win just because it ran first
    let mut records = weeks;
    records.push(rollup);
    let last = aggregate_seasons(&records);
    assert_eq!(last[0].game_count, 16);

    assert_eq!(first, last);
}

#[test]
fn test_rollup_without_games_falls_back_to_tally() {
    // A rollup that never recorded a games count is no help; weekly
    // records still drive the count
    let rollup = season_level(2024, None);
    let records = vec![rollup, weekly(2024, 1), weekly(2024, 2)];

    let aggregates = aggregate_seasons(&records);
    assert_eq!(aggregates[0].game_count, 2);
}

#[test]
fn test_permutation_invariance() {
    let mut w1 = weekly(2024, 1);
    w1.stats.passing_yards = Some(210);
    w1.stats.passing_epa = Some(5.5);
    let mut w2 = weekly(2024, 2);
    w2.stats.passing_yards = Some(315);
    let mut rollup = season_level(2023, Some(17));
    rollup.stats.passing_yards = Some(4100);

    let forward = aggregate_seasons(&[w1.clone(), w2.clone(), rollup.clone()]);
    let reversed = aggregate_seasons(&[rollup, w2, w1]);

    assert_eq!(forward, reversed);
}

#[test]
fn test_aggregation_is_idempotent() {
    let mut w1 = weekly(2024, 1);
    w1.stats.receiving_yards = Some(120);
    w1.stats.receptions = Some(8);
    let records = vec![w1, weekly(2024, 2)];

    let once = aggregate_seasons(&records);
    let twice = aggregate_seasons(&records);
    assert_eq!(once, twice);
}

#[test]
fn test_epa_per_play_derived_from_sums() {
    let mut w1 = weekly(2024, 1);
    w1.stats.passing_attempts = Some(30);
    w1.stats.passing_epa = Some(6.0);
    let mut w2 = weekly(2024, 2);
    w2.stats.passing_attempts = Some(20);
    w2.stats.passing_epa = Some(4.0);

    let aggregates = aggregate_seasons(&[w1, w2]);
    let passing = &aggregates[0].passing;

    assert_eq!(passing.epa, 10.0);
    assert_eq!(passing.epa_per_play, Some(0.2));
}

#[test]
fn test_epa_per_play_none_without_attempts() {
    let mut w1 = weekly(2024, 1);
    w1.stats.receiving_yards = Some(45);

    let aggregates = aggregate_seasons(&[w1]);
    assert_eq!(aggregates[0].passing.epa_per_play, None);
    assert_eq!(aggregates[0].rushing.epa_per_play, None);
}

#[test]
fn test_success_rate_is_play_weighted() {
    // 40 attempts at 50% and 10 attempts at 100% -> 60%, not 75%
    let mut w1 = weekly(2024, 1);
    w1.stats.rushing_attempts = Some(40);
    w1.stats.rushing_success_rate = Some(50.0);
    let mut w2 = weekly(2024, 2);
    w2.stats.rushing_attempts = Some(10);
    w2.stats.rushing_success_rate = Some(100.0);

    let aggregates = aggregate_seasons(&[w1, w2]);
    assert_eq!(aggregates[0].rushing.success_rate, Some(60.0));
}

#[test]
fn test_success_rate_ignores_records_without_weight() {
    let mut w1 = weekly(2024, 1);
    w1.stats.rushing_attempts = Some(10);
    w1.stats.rushing_success_rate = Some(40.0);
    // Rate with no recorded attempts cannot be weighted in
    let mut w2 = weekly(2024, 2);
    w2.stats.rushing_success_rate = Some(90.0);

    let aggregates = aggregate_seasons(&[w1, w2]);
    assert_eq!(aggregates[0].rushing.success_rate, Some(40.0));
}

#[test]
fn test_yards_per_attempt_accessors() {
    let mut w1 = weekly(2024, 1);
    w1.stats.passing_attempts = Some(20);
    w1.stats.passing_yards = Some(150);
    w1.stats.rushing_attempts = Some(4);
    w1.stats.rushing_yards = Some(22);
    w1.stats.receptions = Some(5);
    w1.stats.receiving_yards = Some(60);

    let aggregates = aggregate_seasons(&[w1]);
    let agg = &aggregates[0];

    assert_eq!(agg.passing.yards_per_attempt(), Some(7.5));
    assert_eq!(agg.rushing.yards_per_carry(), Some(5.5));
    assert_eq!(agg.receiving.yards_per_reception(), Some(12.0));

    // No denominator -> no rate
    assert_eq!(PassingTotals::default().yards_per_attempt(), None);
}

#[test]
fn test_career_totals_sum_across_seasons() {
    let mut s2023 = season_level(2023, Some(17));
    s2023.stats.passing_yards = Some(4100);
    s2023.stats.passing_attempts = Some(560);
    s2023.stats.passing_epa = Some(80.0);
    let mut s2024 = season_level(2024, Some(16));
    s2024.stats.passing_yards = Some(3900);
    s2024.stats.passing_attempts = Some(540);
    s2024.stats.passing_epa = Some(60.0);

    let seasons = aggregate_seasons(&[s2023, s2024]);
    let totals = career_totals(&seasons);

    assert_eq!(totals.seasons, 2);
    assert_eq!(totals.game_count, 33);
    assert_eq!(totals.passing.yards, 8000);
    assert_eq!(totals.passing.attempts, 1100);
    assert_eq!(totals.passing.epa, 140.0);
    assert_eq!(totals.passing.epa_per_play, Some(140.0 / 1100.0));
}

#[test]
fn test_career_totals_empty() {
    let totals = career_totals(&[]);
    assert_eq!(totals.seasons, 0);
    assert_eq!(totals.game_count, 0);
    assert_eq!(totals.passing.yards, 0);
    assert_eq!(totals.passing.epa_per_play, None);
}
