//! DAC Sensor Thresholds
//!
//! Hard limits define the closed interval a reading must sit in to count as
//! in range. Warning bounds define a narrower band inside it; a reading
//! strictly below the warning minimum or strictly above the warning maximum
//! is healthy-but-drifting and raises a warning.
//!
//! ```text
//!  min      warningMin            warningMax      max
//!   |  warn  |        healthy        |     warn     |
//! --+--------+-----------------------+--------------+--  critical outside
//! ```

// ===== CO2 CONCENTRATION =====

/// Lowest plausible CO₂ reading at the intake (ppm).
pub const CO2_MIN_PPM: f64 = 0.0;

/// Highest CO₂ reading the intake is rated for (ppm).
pub const CO2_MAX_PPM: f64 = 1000.0;

/// Below this the intake air is unusually lean (ppm).
///
/// Outdoor ambient sits around 420 ppm, so the healthy band starts just under it.
pub const CO2_WARNING_MIN_PPM: f64 = 400.0;

/// Above this the intake is approaching saturation (ppm).
pub const CO2_WARNING_MAX_PPM: f64 = 800.0;

// ===== PROCESS TEMPERATURE =====

/// Minimum operating temperature (°C).
pub const TEMP_MIN_C: f64 = -10.0;

/// Maximum operating temperature (°C).
pub const TEMP_MAX_C: f64 = 50.0;

/// Below freezing the sorbent loses capacity (°C).
pub const TEMP_WARNING_MIN_C: f64 = 0.0;

/// Above this the regeneration cycle starts to overlap with adsorption (°C).
pub const TEMP_WARNING_MAX_C: f64 = 40.0;

// ===== AIRFLOW =====

/// Minimum airflow through the contactor (m³/s).
pub const AIRFLOW_MIN_M3_S: f64 = 0.0;

/// Maximum rated airflow (m³/s).
pub const AIRFLOW_MAX_M3_S: f64 = 100.0;

/// Below this the fans are stalling or filters are clogged (m³/s).
pub const AIRFLOW_WARNING_MIN_M3_S: f64 = 10.0;

/// Above this residence time drops and capture suffers (m³/s).
pub const AIRFLOW_WARNING_MAX_M3_S: f64 = 80.0;

// ===== CAPTURE EFFICIENCY =====

/// Efficiency is a percentage (%).
pub const EFFICIENCY_MIN_PCT: f64 = 0.0;

/// Efficiency is a percentage (%).
pub const EFFICIENCY_MAX_PCT: f64 = 100.0;

/// Below this the unit is underperforming (%).
pub const EFFICIENCY_WARNING_MIN_PCT: f64 = 70.0;

/// Above this the reading is suspiciously high, usually a sensor fault (%).
pub const EFFICIENCY_WARNING_MAX_PCT: f64 = 95.0;

// ===== STATUS COLOURS =====

/// Display colour for healthy units.
pub const STATUS_COLOR_HEALTHY: &str = "#10b981";

/// Display colour for units in warning.
pub const STATUS_COLOR_WARNING: &str = "#f59e0b";

/// Display colour for critical units.
pub const STATUS_COLOR_CRITICAL: &str = "#ef4444";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_bands_sit_inside_hard_limits() {
        let bands = [
            (CO2_MIN_PPM, CO2_WARNING_MIN_PPM, CO2_WARNING_MAX_PPM, CO2_MAX_PPM),
            (TEMP_MIN_C, TEMP_WARNING_MIN_C, TEMP_WARNING_MAX_C, TEMP_MAX_C),
            (AIRFLOW_MIN_M3_S, AIRFLOW_WARNING_MIN_M3_S, AIRFLOW_WARNING_MAX_M3_S, AIRFLOW_MAX_M3_S),
            (EFFICIENCY_MIN_PCT, EFFICIENCY_WARNING_MIN_PCT, EFFICIENCY_WARNING_MAX_PCT, EFFICIENCY_MAX_PCT),
        ];

        for (min, warn_min, warn_max, max) in bands {
            assert!(min <= warn_min && warn_min <= warn_max && warn_max <= max);
        }
    }
}
