//! Range Evaluation
//!
//! ## Overview
//!
//! A reading is judged against its sensor's threshold in two steps:
//!
//! 1. **Range**: is the value inside the closed interval `[min, max]`?
//!    If not, the reading is critical. Nothing else is checked.
//! 2. **Warning band**: for in-range values, is it strictly below
//!    `warningMin` or strictly above `warningMax`? If so, it is a warning.
//!
//! ```text
//! value == min        -> in range       (inclusive)
//! value == warningMin -> healthy        (strict)
//! value <  warningMin -> warning
//! value <  min        -> critical
//! ```
//!
//! The boundary asymmetry is deliberate: the hard limits include their
//! endpoints, the warning bounds do not.
//!
//! ## Usage Example
//!
//! ```rust
//! use dacwatch_core::{classify, is_in_range, is_in_warning_range, SensorType, UnitStatus};
//!
//! assert!(is_in_range(1000.0, SensorType::Co2));
//! assert!(is_in_warning_range(900.0, SensorType::Co2));
//! assert_eq!(classify(1200.0, SensorType::Co2), UnitStatus::Critical);
//! ```
//!
//! The free functions use the built-in table. For site-specific limits, call
//! the same operations on a [`crate::ThresholdTable`].

pub(crate) mod range;

use crate::sensors::{Reading, SensorType};
use crate::status::UnitStatus;
use crate::thresholds::{ThresholdTable, DEFAULT_THRESHOLDS};

/// True iff `min <= value <= max` for the sensor's default threshold
pub fn is_in_range(value: f64, sensor_type: SensorType) -> bool {
    DEFAULT_THRESHOLDS.is_in_range(value, sensor_type)
}

/// True iff the value is in range but strictly outside the warning band
///
/// Out-of-range values are never a warning; they are critical.
pub fn is_in_warning_range(value: f64, sensor_type: SensorType) -> bool {
    DEFAULT_THRESHOLDS.is_in_warning_range(value, sensor_type)
}

/// Status of a single reading against the default table
pub fn classify(value: f64, sensor_type: SensorType) -> UnitStatus {
    DEFAULT_THRESHOLDS.classify(value, sensor_type)
}

/// Anything that can grade a single reading
///
/// The aggregator is generic over this so alternative rule sets (a site
/// table, a maintenance-mode table that never reports warnings) plug in
/// without touching the roll-up logic.
pub trait ReadingClassifier {
    /// Status of one reading
    fn classify_reading(&self, reading: &Reading) -> UnitStatus;
}

impl ReadingClassifier for ThresholdTable {
    fn classify_reading(&self, reading: &Reading) -> UnitStatus {
        self.classify(reading.value, reading.sensor_type)
    }
}

impl<C: ReadingClassifier + ?Sized> ReadingClassifier for &C {
    fn classify_reading(&self, reading: &Reading) -> UnitStatus {
        (**self).classify_reading(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::get_thresholds;

    #[test]
    fn hard_limits_are_inclusive() {
        for sensor in SensorType::ALL {
            let t = get_thresholds(sensor);
            assert!(is_in_range(t.min(), sensor), "{sensor} min");
            assert!(is_in_range(t.max(), sensor), "{sensor} max");
        }
    }

    #[test]
    fn warning_bounds_are_strict() {
        let eps = 1e-6;
        for sensor in SensorType::ALL {
            let t = get_thresholds(sensor);
            if let Some(lo) = t.warning_min() {
                assert!(!is_in_warning_range(lo, sensor), "{sensor} warningMin");
                assert!(is_in_warning_range(lo - eps, sensor), "{sensor} below warningMin");
            }
            if let Some(hi) = t.warning_max() {
                assert!(!is_in_warning_range(hi, sensor), "{sensor} warningMax");
                assert!(is_in_warning_range(hi + eps, sensor), "{sensor} above warningMax");
            }
        }
    }

    #[test]
    fn zero_warning_bound_still_applies() {
        // Temperature warningMin is 0.0; a zero bound is a real bound
        assert!(is_in_warning_range(-5.0, SensorType::Temperature));
        assert_eq!(classify(-5.0, SensorType::Temperature), UnitStatus::Warning);
    }

    #[test]
    fn out_of_range_is_never_warning() {
        assert!(!is_in_warning_range(1200.0, SensorType::Co2));
        assert!(!is_in_warning_range(-11.0, SensorType::Temperature));
    }

    #[test]
    fn classify_matches_predicates() {
        let cases = [
            (SensorType::Co2, 420.0, UnitStatus::Healthy),
            (SensorType::Co2, 1200.0, UnitStatus::Critical),
            (SensorType::Temperature, 45.0, UnitStatus::Warning),
            (SensorType::Airflow, 5.0, UnitStatus::Warning),
            (SensorType::Efficiency, 85.0, UnitStatus::Healthy),
            (SensorType::Efficiency, 100.5, UnitStatus::Critical),
        ];

        for (sensor, value, expected) in cases {
            assert_eq!(classify(value, sensor), expected, "{sensor}={value}");
        }
    }

    #[test]
    fn nan_is_critical() {
        assert!(!is_in_range(f64::NAN, SensorType::Airflow));
        assert_eq!(classify(f64::NAN, SensorType::Airflow), UnitStatus::Critical);
    }
}
