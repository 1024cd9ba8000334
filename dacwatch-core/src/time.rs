//! Time handling
//!
//! Everything in the crate takes "now" as an argument instead of reading the
//! clock, so relative formatting and generated data stay reproducible. A
//! `TimeSource` supplies that argument at the call site:
//! - `SystemTime` for the wall clock
//! - `FixedTime` for tests and replays
//!
//! Sensor history is queried over a [`TimeRange`], usually one of the
//! [`TimeRangePreset`] windows ending at "now".

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::time::MS_PER_HOUR;
use crate::errors::{StatusError, StatusResult};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of the current time
pub trait TimeSource {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Start at the given timestamp
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to a timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp = self.timestamp.saturating_add(ms);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Closed window `[start, end]` of timestamps
///
/// Invariant: `start <= end`. Both ends are inclusive, so a reading taken
/// exactly at `end` belongs to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeRange"))]
pub struct TimeRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    /// Window from `start` to `end`, both inclusive
    pub fn new(start: Timestamp, end: Timestamp) -> StatusResult<Self> {
        if start > end {
            return Err(StatusError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `preset` window ending at `now`
    pub const fn last(preset: TimeRangePreset, now: Timestamp) -> Self {
        Self {
            start: now.saturating_sub(preset.duration_ms()),
            end: now,
        }
    }

    /// First timestamp in the window
    pub const fn start(&self) -> Timestamp {
        self.start
    }

    /// Last timestamp in the window
    pub const fn end(&self) -> Timestamp {
        self.end
    }

    /// Window length in milliseconds
    pub const fn duration_ms(&self) -> u64 {
        self.end - self.start
    }

    /// Whether `timestamp` falls inside the window, ends included
    pub const fn contains(&self, timestamp: Timestamp) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTimeRange {
    start: Timestamp,
    end: Timestamp,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeRange> for TimeRange {
    type Error = StatusError;

    fn try_from(raw: RawTimeRange) -> StatusResult<Self> {
        TimeRange::new(raw.start, raw.end)
    }
}

/// Quick-pick windows offered next to the sensor history chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeRangePreset {
    /// Last hour
    #[cfg_attr(feature = "serde", serde(rename = "1h"))]
    LastHour,
    /// Last 6 hours
    #[cfg_attr(feature = "serde", serde(rename = "6h"))]
    Last6Hours,
    /// Last 24 hours, the window a fresh view opens with
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "24h"))]
    Last24Hours,
    /// Last 7 days
    #[cfg_attr(feature = "serde", serde(rename = "7d"))]
    Last7Days,
    /// Last 30 days
    #[cfg_attr(feature = "serde", serde(rename = "30d"))]
    Last30Days,
}

impl TimeRangePreset {
    /// Every preset, shortest first
    pub const ALL: [TimeRangePreset; 5] = [
        TimeRangePreset::LastHour,
        TimeRangePreset::Last6Hours,
        TimeRangePreset::Last24Hours,
        TimeRangePreset::Last7Days,
        TimeRangePreset::Last30Days,
    ];

    /// Short key, e.g. `"24h"`
    pub const fn key(&self) -> &'static str {
        match self {
            TimeRangePreset::LastHour => "1h",
            TimeRangePreset::Last6Hours => "6h",
            TimeRangePreset::Last24Hours => "24h",
            TimeRangePreset::Last7Days => "7d",
            TimeRangePreset::Last30Days => "30d",
        }
    }

    /// Button label
    pub const fn label(&self) -> &'static str {
        match self {
            TimeRangePreset::LastHour => "Last Hour",
            TimeRangePreset::Last6Hours => "Last 6 Hours",
            TimeRangePreset::Last24Hours => "Last 24 Hours",
            TimeRangePreset::Last7Days => "Last 7 Days",
            TimeRangePreset::Last30Days => "Last 30 Days",
        }
    }

    /// Window length in hours
    pub const fn hours(&self) -> u64 {
        match self {
            TimeRangePreset::LastHour => 1,
            TimeRangePreset::Last6Hours => 6,
            TimeRangePreset::Last24Hours => 24,
            TimeRangePreset::Last7Days => 168,
            TimeRangePreset::Last30Days => 720,
        }
    }

    /// Window length in milliseconds
    pub const fn duration_ms(&self) -> u64 {
        self.hours() * MS_PER_HOUR
    }
}

impl fmt::Display for TimeRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
