//! Threshold table
//!
//! Each sensor type maps to a closed interval `[min, max]` of acceptable
//! values and an optional narrower warning band. The default table is a
//! `static` built from [`crate::constants::thresholds`]; deployments that need
//! different limits build their own `ThresholdTable` from overrides, either in
//! code or from JSON configuration.
//!
//! ```
//! use dacwatch_core::{SensorType, Threshold, ThresholdTable};
//!
//! // A site with a hotter plant room
//! let table = ThresholdTable::default()
//!     .with_threshold(SensorType::Temperature, Threshold::new(-10.0, 60.0, Some(0.0), Some(50.0))?);
//!
//! assert!(!table.is_in_warning_range(45.0, SensorType::Temperature));
//! # Ok::<(), dacwatch_core::StatusError>(())
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::thresholds::*;
use crate::errors::{StatusError, StatusResult};
use crate::sensors::{Reading, SensorType};
use crate::status::{self, UnitStatus};
use crate::validators::range;

/// Acceptable bounds for one sensor type
///
/// Invariant: `min <= warning_min <= warning_max <= max` for whichever
/// warning bounds are present, and every bound is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", try_from = "RawThreshold"))]
pub struct Threshold {
    min: f64,
    max: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    warning_min: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    warning_max: Option<f64>,
}

impl Threshold {
    /// Create a threshold, checking the bound ordering
    pub fn new(
        min: f64,
        max: f64,
        warning_min: Option<f64>,
        warning_max: Option<f64>,
    ) -> StatusResult<Self> {
        let bounds_finite = min.is_finite()
            && max.is_finite()
            && warning_min.map_or(true, f64::is_finite)
            && warning_max.map_or(true, f64::is_finite);
        if !bounds_finite {
            return Err(StatusError::InvalidThreshold { reason: "bounds must be finite" });
        }

        if min > max {
            return Err(StatusError::InvalidThreshold { reason: "min exceeds max" });
        }

        if let Some(lo) = warning_min {
            if lo < min || lo > max {
                return Err(StatusError::InvalidThreshold { reason: "warningMin outside [min, max]" });
            }
        }

        if let Some(hi) = warning_max {
            if hi < min || hi > max {
                return Err(StatusError::InvalidThreshold { reason: "warningMax outside [min, max]" });
            }
        }

        if let (Some(lo), Some(hi)) = (warning_min, warning_max) {
            if lo > hi {
                return Err(StatusError::InvalidThreshold { reason: "warningMin exceeds warningMax" });
            }
        }

        Ok(Self { min, max, warning_min, warning_max })
    }

    /// Hard limits only, no warning band
    pub fn range(min: f64, max: f64) -> StatusResult<Self> {
        Self::new(min, max, None, None)
    }

    // Unchecked; only for the compile-time defaults, covered by tests below.
    const fn banded(min: f64, max: f64, warning_min: f64, warning_max: f64) -> Self {
        Self {
            min,
            max,
            warning_min: Some(warning_min),
            warning_max: Some(warning_max),
        }
    }

    /// Lowest in-range value (inclusive)
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Highest in-range value (inclusive)
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Values strictly below this are in the warning zone
    pub const fn warning_min(&self) -> Option<f64> {
        self.warning_min
    }

    /// Values strictly above this are in the warning zone
    pub const fn warning_max(&self) -> Option<f64> {
        self.warning_max
    }
}

/// Wire form of a threshold, validated on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawThreshold {
    min: f64,
    max: f64,
    #[serde(default)]
    warning_min: Option<f64>,
    #[serde(default)]
    warning_max: Option<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawThreshold> for Threshold {
    type Error = StatusError;

    fn try_from(raw: RawThreshold) -> StatusResult<Self> {
        Threshold::new(raw.min, raw.max, raw.warning_min, raw.warning_max)
    }
}

/// Built-in thresholds for the DAC fleet
pub static DEFAULT_THRESHOLDS: ThresholdTable = ThresholdTable {
    thresholds: [
        Threshold::banded(CO2_MIN_PPM, CO2_MAX_PPM, CO2_WARNING_MIN_PPM, CO2_WARNING_MAX_PPM),
        Threshold::banded(TEMP_MIN_C, TEMP_MAX_C, TEMP_WARNING_MIN_C, TEMP_WARNING_MAX_C),
        Threshold::banded(
            AIRFLOW_MIN_M3_S,
            AIRFLOW_MAX_M3_S,
            AIRFLOW_WARNING_MIN_M3_S,
            AIRFLOW_WARNING_MAX_M3_S,
        ),
        Threshold::banded(
            EFFICIENCY_MIN_PCT,
            EFFICIENCY_MAX_PCT,
            EFFICIENCY_WARNING_MIN_PCT,
            EFFICIENCY_WARNING_MAX_PCT,
        ),
    ],
};

/// Look up the default threshold for a sensor type
pub fn get_thresholds(sensor_type: SensorType) -> &'static Threshold {
    DEFAULT_THRESHOLDS.get(sensor_type)
}

/// One threshold per sensor type
///
/// Total over [`SensorType`]: indexed by the enum discriminant, so there is
/// no missing-key case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdTable {
    thresholds: [Threshold; SensorType::ALL.len()],
}

impl Default for ThresholdTable {
    fn default() -> Self {
        DEFAULT_THRESHOLDS
    }
}

impl ThresholdTable {
    /// Threshold for a sensor type
    pub const fn get(&self, sensor_type: SensorType) -> &Threshold {
        &self.thresholds[sensor_type.index()]
    }

    /// Replace one sensor's threshold
    pub fn with_threshold(mut self, sensor_type: SensorType, threshold: Threshold) -> Self {
        log_debug!(
            "Threshold override for {}: [{}, {}] warning {:?}..{:?}",
            sensor_type, threshold.min, threshold.max, threshold.warning_min, threshold.warning_max
        );
        self.thresholds[sensor_type.index()] = threshold;
        self
    }

    /// Load overrides from a JSON object keyed by sensor name
    ///
    /// Sensors missing from the object keep their default threshold.
    ///
    /// ```json
    /// { "airflow": { "min": 0, "max": 120, "warningMin": 15, "warningMax": 100 } }
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> StatusResult<Self> {
        use std::collections::BTreeMap;

        let overrides: BTreeMap<SensorType, Threshold> = serde_json::from_str(json)
            .map_err(|e| StatusError::Config { reason: e.to_string() })?;

        Ok(overrides
            .into_iter()
            .fold(Self::default(), |table, (sensor, threshold)| {
                table.with_threshold(sensor, threshold)
            }))
    }

    /// See [`crate::is_in_range`]
    pub fn is_in_range(&self, value: f64, sensor_type: SensorType) -> bool {
        range::value_in_range(value, self.get(sensor_type))
    }

    /// See [`crate::is_in_warning_range`]
    pub fn is_in_warning_range(&self, value: f64, sensor_type: SensorType) -> bool {
        range::value_in_warning_band(value, self.get(sensor_type))
    }

    /// See [`crate::classify`]
    pub fn classify(&self, value: f64, sensor_type: SensorType) -> UnitStatus {
        range::classify_value(value, self.get(sensor_type))
    }

    /// See [`crate::determine_unit_status`]
    pub fn determine_unit_status(&self, readings: &[Reading]) -> UnitStatus {
        status::aggregate(self, readings)
    }
}
