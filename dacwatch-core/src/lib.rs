//! Core status engine for DACWatch
//!
//! Classifies sensor readings from Direct Air Capture units against static
//! thresholds and rolls them up into a per-unit health status.
//!
//! Key properties:
//! - Pure, synchronous functions over immutable data
//! - Default thresholds are a compile-time constant, no global mutable state
//! - Aggregate status never depends on reading order
//!
//! ```
//! use dacwatch_core::{determine_unit_status, Reading, SensorType, UnitStatus};
//!
//! let readings = [
//!     Reading::new(SensorType::Co2, 420.0),
//!     Reading::new(SensorType::Temperature, 45.0),
//! ];
//!
//! // 45°C is inside the hard limits but above the 40°C warning bound
//! assert_eq!(determine_unit_status(&readings), UnitStatus::Warning);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod fleet;
pub mod format;
pub mod sensors;
pub mod status;
pub mod test_runs;
pub mod thresholds;
pub mod time;
pub mod units;
pub mod validators;

#[cfg(feature = "mock")]
pub mod mock;

// Public API
pub use errors::{StatusError, StatusResult};
pub use fleet::{FleetOverview, StatusCounts};
pub use sensors::{available_sensor_types, Reading, SensorDataFilter, SensorType, TimedReading};
pub use status::{determine_unit_status, UnitStatus};
pub use thresholds::{get_thresholds, Threshold, ThresholdTable, DEFAULT_THRESHOLDS};
pub use time::{TimeRange, TimeRangePreset, Timestamp};
pub use units::{extract_building, filter_units_by_building, get_buildings_from_units, Unit};
pub use validators::{classify, is_in_range, is_in_warning_range};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
