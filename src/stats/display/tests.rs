//! Unit tests for render-time formatting

use super::*;
use crate::feed::types::GameRecord;
use crate::stats::aggregate::aggregate_seasons;

#[test]
fn test_completion_percentage_basic() {
    assert_eq!(completion_percentage(Some(20), Some(30)), Some(66.7));
    assert_eq!(completion_percentage(Some(30), Some(30)), Some(100.0));
    assert_eq!(completion_percentage(Some(0), Some(30)), Some(0.0));
}

#[test]
fn test_completion_percentage_rounds_to_one_decimal() {
    // 2/3 = 66.666... -> 66.7, 1/3 = 33.333... -> 33.3
    assert_eq!(completion_percentage(Some(2), Some(3)), Some(66.7));
    assert_eq!(completion_percentage(Some(1), Some(3)), Some(33.3));
    assert_eq!(completion_percentage(Some(1), Some(8)), Some(12.5));
}

#[test]
fn test_completion_percentage_no_data_cases() {
    assert_eq!(completion_percentage(Some(0), Some(0)), None);
    assert_eq!(completion_percentage(Some(20), Some(0)), None);
    assert_eq!(completion_percentage(None, Some(30)), None);
    assert_eq!(completion_percentage(Some(20), None), None);
    assert_eq!(completion_percentage(None, None), None);
}

#[test]
fn test_display_count_collapses_none_and_zero() {
    assert_eq!(display_count(None, false), "-");
    assert_eq!(display_count(Some(0), false), "-");
    assert_eq!(display_count(Some(12), false), "12");
    assert_eq!(display_count(Some(-4), false), "-4");
}

#[test]
fn test_display_count_allow_zero_for_totals_rows() {
    // A totals row must distinguish a true zero from "not recorded"
    assert_eq!(display_count(Some(0), true), "0");
    assert_eq!(display_count(None, true), "-");
}

#[test]
fn test_display_value_formatting() {
    assert_eq!(display_value(None, false), "-");
    assert_eq!(display_value(Some(0.0), false), "-");
    assert_eq!(display_value(Some(0.0), true), "0.0");
    assert_eq!(display_value(Some(7.25), false), "7.2");
    assert_eq!(display_value(Some(66.7), false), "66.7");
}

#[test]
fn test_display_percent() {
    assert_eq!(display_percent(None), "-");
    assert_eq!(display_percent(Some(66.7)), "66.7%");
    assert_eq!(display_percent(Some(0.0)), "0.0%");
}

#[test]
fn test_display_epa_signed() {
    assert_eq!(display_epa(None, false), "-");
    assert_eq!(display_epa(Some(0.0), false), "-");
    assert_eq!(display_epa(Some(12.34), false), "+12.3");
    assert_eq!(display_epa(Some(-3.96), false), "-4.0");
    assert_eq!(display_epa(Some(0.0), true), "+0.0");
}

#[test]
fn test_total_epa_sums_all_three_families() {
    let mut rec = GameRecord::test_weekly(2024, 1);
    rec.stats.passing_epa = Some(8.0);
    rec.stats.rushing_epa = Some(1.5);
    rec.stats.receiving_epa = Some(-0.5);

    let aggregates = aggregate_seasons(&[rec]);
    assert_eq!(total_epa(&aggregates[0]), 9.0);
}

#[test]
fn test_total_epa_with_nothing_recorded_is_zero() {
    let aggregates = aggregate_seasons(&[GameRecord::test_weekly(2024, 1)]);
    let total = total_epa(&aggregates[0]);
    assert_eq!(total, 0.0);
    // ...which the cell formatter then renders as no-data
    assert_eq!(display_epa(Some(total), false), "-");
}
