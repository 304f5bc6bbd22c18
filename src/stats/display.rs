//! Render-time formatting of nullable stat values.
//!
//! The career table renders both "not recorded" and 0 as a bare dash so a
//! wideout's passing columns never show a wall of zeros. Totals rows opt
//! out of the zero-collapsing with `allow_zero`, since a genuine zero
//! games-played is information. These helpers apply only at render/export
//! time; collapsing zeros before aggregation would corrupt the sums.

use crate::stats::aggregate::SeasonAggregate;

#[cfg(test)]
mod tests;

/// Marker rendered for "no data".
pub const NO_DATA: &str = "-";

/// Completion percentage to one decimal place, or `None` when there is
/// nothing to divide: either side missing, or zero attempts.
pub fn completion_percentage(completions: Option<u32>, attempts: Option<u32>) -> Option<f64> {
    match (completions, attempts) {
        (Some(c), Some(a)) if a > 0 => Some(round1(c as f64 / a as f64 * 100.0)),
        _ => None,
    }
}

/// Format an integer stat cell, collapsing `None` (and 0 unless
/// `allow_zero`) to the no-data marker.
pub fn display_count(value: Option<i64>, allow_zero: bool) -> String {
    match value {
        None => NO_DATA.to_string(),
        Some(0) if !allow_zero => NO_DATA.to_string(),
        Some(v) => v.to_string(),
    }
}

/// Format a float stat cell to one decimal place, with the same
/// zero-collapsing convention as [`display_count`].
pub fn display_value(value: Option<f64>, allow_zero: bool) -> String {
    match value {
        None => NO_DATA.to_string(),
        Some(v) if v == 0.0 && !allow_zero => NO_DATA.to_string(),
        Some(v) => format!("{:.1}", v),
    }
}

/// Format a percentage cell ("66.7%"), or the no-data marker.
pub fn display_percent(value: Option<f64>) -> String {
    match value {
        None => NO_DATA.to_string(),
        Some(v) => format!("{:.1}%", v),
    }
}

/// Format an EPA cell with an explicit sign ("+12.3" / "-4.0"), or the
/// no-data marker for `None` and for an unrecorded zero.
pub fn display_epa(value: Option<f64>, allow_zero: bool) -> String {
    match value {
        None => NO_DATA.to_string(),
        Some(v) if v == 0.0 && !allow_zero => NO_DATA.to_string(),
        Some(v) => format!("{:+.1}", v),
    }
}

/// Total EPA across the three stat families, summed at presentation time.
pub fn total_epa(agg: &SeasonAggregate) -> f64 {
    agg.passing.epa + agg.rushing.epa + agg.receiving.epa
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
