//! Threshold predicates
//!
//! Pure comparisons against a single [`Threshold`]. NaN fails every
//! comparison, so it is out of range and therefore critical.

use crate::status::UnitStatus;
use crate::thresholds::Threshold;

/// Closed-interval membership
pub fn value_in_range(value: f64, threshold: &Threshold) -> bool {
    value >= threshold.min() && value <= threshold.max()
}

/// In range, and strictly past one of the warning bounds
pub fn value_in_warning_band(value: f64, threshold: &Threshold) -> bool {
    if !value_in_range(value, threshold) {
        return false;
    }

    let below = threshold.warning_min().is_some_and(|lo| value < lo);
    let above = threshold.warning_max().is_some_and(|hi| value > hi);
    below || above
}

/// Single-reading status
pub fn classify_value(value: f64, threshold: &Threshold) -> UnitStatus {
    if !value_in_range(value, threshold) {
        UnitStatus::Critical
    } else if value_in_warning_band(value, threshold) {
        UnitStatus::Warning
    } else {
        UnitStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        let t = Threshold::range(0.0, 10.0).unwrap();
        assert!(value_in_range(5.0, &t));
        assert!(value_in_range(0.0, &t));
        assert!(value_in_range(10.0, &t));
        assert!(!value_in_range(-0.1, &t));
        assert!(!value_in_range(10.1, &t));
    }

    #[test]
    fn no_band_means_no_warning() {
        let t = Threshold::range(0.0, 10.0).unwrap();
        assert!(!value_in_warning_band(0.0, &t));
        assert!(!value_in_warning_band(10.0, &t));
        assert_eq!(classify_value(0.0, &t), UnitStatus::Healthy);
    }

    #[test]
    fn one_sided_band() {
        let t = Threshold::new(0.0, 10.0, None, Some(8.0)).unwrap();
        assert!(!value_in_warning_band(0.5, &t));
        assert!(value_in_warning_band(9.0, &t));
    }

    #[test]
    fn infinities_are_out_of_range() {
        let t = Threshold::range(0.0, 10.0).unwrap();
        assert_eq!(classify_value(f64::INFINITY, &t), UnitStatus::Critical);
        assert_eq!(classify_value(f64::NEG_INFINITY, &t), UnitStatus::Critical);
    }
}
