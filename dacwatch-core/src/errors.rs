//! Error Types for Status Classification
//!
//! Classification itself never fails. Out-of-range values, missing locations
//! and empty reading sets are all ordinary outcomes with a well-defined status.
//! Errors only appear at the edges where untyped input enters the crate:
//!
//! - `InvalidSensorType`: a sensor name that is not one of the four known types
//! - `InvalidThreshold`: a runtime threshold that breaks the bound ordering
//! - `Config`: threshold configuration that could not be parsed
//! - `InvalidTimeRange`: a query window that ends before it starts
//!
//! ```rust
//! use dacwatch_core::{SensorType, StatusError};
//!
//! match "humidity".parse::<SensorType>() {
//!     Ok(sensor) => println!("known sensor {sensor}"),
//!     Err(StatusError::InvalidSensorType { name }) => println!("rejecting {name}"),
//!     Err(other) => println!("unexpected: {other}"),
//! }
//! ```

use thiserror_no_std::Error;

use crate::time::Timestamp;

/// Result type for status operations
pub type StatusResult<T> = Result<T, StatusError>;

/// Errors raised while turning untyped input into typed status data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatusError {
    /// Sensor name outside the closed set {co2, temperature, airflow, efficiency}
    #[error("Unknown sensor type: {name}")]
    InvalidSensorType {
        /// The name that failed to parse
        name: String,
    },

    /// Threshold bounds are not ordered min <= warningMin <= warningMax <= max
    #[error("Invalid threshold: {reason}")]
    InvalidThreshold {
        /// Which ordering rule was broken
        reason: &'static str,
    },

    /// Threshold configuration could not be parsed
    #[error("Threshold configuration error: {reason}")]
    Config {
        /// Parser message
        reason: String,
    },

    /// Query window ends before it starts
    #[error("Invalid time range: start {start} is after end {end}")]
    InvalidTimeRange {
        /// Window start, ms since epoch
        start: Timestamp,
        /// Window end, ms since epoch
        end: Timestamp,
    },
}
