// File: crates/curvegraph-core/src/labels.rs
// Summary: Time-based tick label helpers.

use chrono::{NaiveDateTime, Timelike};

use crate::types::LabeledXPoint;

/// Clock label like "1:00 AM" / "12:00 PM".
pub fn hour_label(t: NaiveDateTime) -> String {
    let (is_pm, hour12) = t.time().hour12();
    format!(
        "{}:{:02} {}",
        hour12,
        t.time().minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Short weekday label like "Mon".
pub fn weekday_label(t: NaiveDateTime) -> String {
    t.format("%a").to_string()
}

/// Numeric month/day label like "6/1".
pub fn month_day_label(t: NaiveDateTime) -> String {
    t.format("%-m/%-d").to_string()
}

/// X anchors for a list of observation times, one per index, labeled with
/// the clock time.
pub fn hourly_x_points(times: &[NaiveDateTime]) -> Vec<LabeledXPoint> {
    times
        .iter()
        .enumerate()
        .map(|(index, t)| LabeledXPoint::new(index as f64, hour_label(*t)))
        .collect()
}
