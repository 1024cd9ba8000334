//! Test-Run Acceptance Bounds
//!
//! A test run passes only if every collected metric falls inside its bounds
//! (inclusive on both ends).

/// Minimum acceptable CO₂ capture rate (%).
pub const CAPTURE_RATE_MIN_PCT: f64 = 70.0;

/// Maximum CO₂ capture rate (%).
pub const CAPTURE_RATE_MAX_PCT: f64 = 100.0;

/// Minimum acceptable energy efficiency (%).
pub const ENERGY_EFFICIENCY_MIN_PCT: f64 = 80.0;

/// Maximum energy efficiency (%).
pub const ENERGY_EFFICIENCY_MAX_PCT: f64 = 100.0;

/// Minimum system pressure during a test (bar).
pub const SYSTEM_PRESSURE_MIN_BAR: f64 = 0.8;

/// Maximum system pressure during a test (bar).
///
/// Above this the relief valve opens and the run is aborted on site.
pub const SYSTEM_PRESSURE_MAX_BAR: f64 = 2.0;
