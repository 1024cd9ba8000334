//! Constants for DACWatch Core
//!
//! Every numeric bound used by the classifier lives here, grouped by domain:
//! - **Thresholds**: per-sensor hard limits and warning bands
//! - **Acceptance**: pass/fail bounds for test-run metrics
//! - **Time**: millisecond conversions used by formatting and generators
//!
//! Names carry their units. Changing a value here changes the classification
//! of every unit in the fleet, so keep the tables in one place.

/// Per-sensor hard limits and warning bands for DAC units.
pub mod thresholds;

/// Acceptance bounds applied to test-run metrics.
pub mod acceptance;

/// Millisecond conversions.
pub mod time;

pub use thresholds::{
    CO2_MIN_PPM, CO2_MAX_PPM, CO2_WARNING_MIN_PPM, CO2_WARNING_MAX_PPM,
    TEMP_MIN_C, TEMP_MAX_C, TEMP_WARNING_MIN_C, TEMP_WARNING_MAX_C,
    AIRFLOW_MIN_M3_S, AIRFLOW_MAX_M3_S, AIRFLOW_WARNING_MIN_M3_S, AIRFLOW_WARNING_MAX_M3_S,
    EFFICIENCY_MIN_PCT, EFFICIENCY_MAX_PCT, EFFICIENCY_WARNING_MIN_PCT, EFFICIENCY_WARNING_MAX_PCT,
};

pub use time::{MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR, MS_PER_DAY};
