//! Unit status aggregation
//!
//! A unit's status is derived from its current readings, never stored as the
//! source of truth:
//!
//! - any reading out of range          -> `Critical`
//! - otherwise any reading in warning  -> `Warning`
//! - otherwise (including no readings) -> `Healthy`
//!
//! The scan stops at the first critical reading. That is only an early exit:
//! one out-of-range reading decides the outcome whatever else is in the list,
//! so the result does not depend on reading order.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::thresholds::{STATUS_COLOR_CRITICAL, STATUS_COLOR_HEALTHY, STATUS_COLOR_WARNING};
use crate::sensors::Reading;
use crate::thresholds::DEFAULT_THRESHOLDS;
use crate::validators::ReadingClassifier;

/// Aggregate health of a unit, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitStatus {
    /// All readings in range and inside their warning bands
    #[default]
    Healthy,
    /// All readings in range, at least one outside its warning band
    Warning,
    /// At least one reading out of range
    Critical,
}

impl UnitStatus {
    /// Every status, least severe first
    pub const ALL: [UnitStatus; 3] = [UnitStatus::Healthy, UnitStatus::Warning, UnitStatus::Critical];

    /// Wire name
    pub const fn name(&self) -> &'static str {
        match self {
            UnitStatus::Healthy => "healthy",
            UnitStatus::Warning => "warning",
            UnitStatus::Critical => "critical",
        }
    }

    /// Title-case label for status cards
    pub const fn label(&self) -> &'static str {
        match self {
            UnitStatus::Healthy => "Healthy",
            UnitStatus::Warning => "Warning",
            UnitStatus::Critical => "Critical",
        }
    }

    /// Hex colour used by status indicators
    pub const fn color(&self) -> &'static str {
        match self {
            UnitStatus::Healthy => STATUS_COLOR_HEALTHY,
            UnitStatus::Warning => STATUS_COLOR_WARNING,
            UnitStatus::Critical => STATUS_COLOR_CRITICAL,
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Roll a unit's readings up into one status using the default thresholds
pub fn determine_unit_status(readings: &[Reading]) -> UnitStatus {
    aggregate(&DEFAULT_THRESHOLDS, readings)
}

/// Roll a unit's readings up into one status using any classifier
pub fn aggregate<C: ReadingClassifier + ?Sized>(classifier: &C, readings: &[Reading]) -> UnitStatus {
    let mut has_warning = false;

    for reading in readings {
        match classifier.classify_reading(reading) {
            UnitStatus::Critical => {
                log_debug!(
                    "{} reading {} out of range, unit is critical",
                    reading.sensor_type, reading.value
                );
                return UnitStatus::Critical;
            }
            UnitStatus::Warning => has_warning = true,
            UnitStatus::Healthy => {}
        }
    }

    if has_warning {
        UnitStatus::Warning
    } else {
        UnitStatus::Healthy
    }
}
