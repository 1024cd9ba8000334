//! Display formatting
//!
//! Text helpers shared by every view that prints sensor values or times.
//! Absolute times are rendered in UTC; callers localise if they need to.

use chrono::DateTime;

use crate::constants::time::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, RELATIVE_TIME_CUTOFF_DAYS};
use crate::sensors::Reading;
use crate::time::Timestamp;

/// Fixed-point rendering with `decimals` places
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Value followed by its unit, e.g. `"420.00 ppm"`
pub fn format_sensor_value(value: f64, unit: &str, decimals: usize) -> String {
    format!("{} {unit}", format_number(value, decimals))
}

/// A reading with its sensor's unit
pub fn format_reading(reading: &Reading, decimals: usize) -> String {
    format_sensor_value(reading.value, reading.sensor_type.unit(), decimals)
}

/// Compact duration: `"2h 5m"`, `"4m 30s"` or `"12s"`
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / MS_PER_SECOND;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{hours}h {}m", minutes % 60)
    } else if minutes > 0 {
        format!("{minutes}m {}s", seconds % 60)
    } else {
        format!("{seconds}s")
    }
}

/// Absolute UTC time, e.g. `"Oct 16, 2026, 09:05 AM"`
pub fn format_timestamp(timestamp: Timestamp) -> String {
    match i64::try_from(timestamp).ok().and_then(DateTime::from_timestamp_millis) {
        Some(time) => time.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => "Invalid Date".to_owned(),
    }
}

/// Age of `then` as seen from `now`
///
/// Under a minute (or in the future) is `"just now"`; up to a week is counted
/// in whole minutes, hours or days; older falls back to [`format_timestamp`].
pub fn format_relative_time(then: Timestamp, now: Timestamp) -> String {
    let elapsed = now.saturating_sub(then);
    let minutes = elapsed / MS_PER_MINUTE;
    let hours = elapsed / MS_PER_HOUR;
    let days = elapsed / MS_PER_DAY;

    if minutes < 1 {
        "just now".to_owned()
    } else if minutes < 60 {
        format!("{minutes} {} ago", pluralize(minutes, "minute"))
    } else if hours < 24 {
        format!("{hours} {} ago", pluralize(hours, "hour"))
    } else if days < RELATIVE_TIME_CUTOFF_DAYS {
        format!("{days} {} ago", pluralize(days, "day"))
    } else {
        format_timestamp(then)
    }
}

/// `word` or `words`, by count
pub(crate) fn pluralize(count: u64, word: &str) -> String {
    if count == 1 {
        word.to_owned()
    } else {
        format!("{word}s")
    }
}
