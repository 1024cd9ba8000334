//! Sensor catalogue and reading types
//!
//! A DAC unit reports four measurements. The set is closed: the threshold
//! table is total over it, so lookups never fail once a value is a
//! `SensorType`. Untyped names are checked once, at parse time.
//!
//! Sensor history is narrowed with a [`SensorDataFilter`]:
//!
//! ```
//! use dacwatch_core::sensors::SensorDataFilter;
//! use dacwatch_core::time::{TimeRange, TimeRangePreset};
//! use dacwatch_core::{SensorType, TimedReading};
//!
//! let now = 1_792_141_500_000;
//! let history = vec![TimedReading {
//!     timestamp: now - 60_000,
//!     sensor_type: SensorType::Co2,
//!     value: 430.0,
//!     unit: "ppm".into(),
//!     unit_id: Some("unit-1".into()),
//! }];
//!
//! let filter = SensorDataFilter::default()
//!     .for_unit("unit-1")
//!     .sensor(SensorType::Co2)
//!     .within(TimeRange::last(TimeRangePreset::LastHour, now));
//! assert_eq!(filter.apply(&history).len(), 1);
//! ```

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{StatusError, StatusResult};
use crate::time::{TimeRange, Timestamp};

/// Sensor type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum SensorType {
    /// CO₂ concentration at the intake
    Co2 = 0,
    /// Process temperature
    Temperature = 1,
    /// Airflow through the contactor
    Airflow = 2,
    /// Capture efficiency
    Efficiency = 3,
}

impl SensorType {
    /// Every sensor type, in declaration order
    pub const ALL: [SensorType; 4] = [
        SensorType::Co2,
        SensorType::Temperature,
        SensorType::Airflow,
        SensorType::Efficiency,
    ];

    /// Wire name
    pub const fn name(&self) -> &'static str {
        match self {
            SensorType::Co2 => "co2",
            SensorType::Temperature => "temperature",
            SensorType::Airflow => "airflow",
            SensorType::Efficiency => "efficiency",
        }
    }

    /// Expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorType::Co2 => "ppm",
            SensorType::Temperature => "°C",
            SensorType::Airflow => "m³/s",
            SensorType::Efficiency => "%",
        }
    }

    /// Human-readable name for charts and legends
    pub const fn display_name(&self) -> &'static str {
        match self {
            SensorType::Co2 => "CO₂ Concentration",
            SensorType::Temperature => "Temperature",
            SensorType::Airflow => "Airflow",
            SensorType::Efficiency => "Capture Efficiency",
        }
    }

    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SensorType {
    type Err = StatusError;

    fn from_str(s: &str) -> StatusResult<Self> {
        SensorType::ALL
            .into_iter()
            .find(|sensor| sensor.name() == s)
            .ok_or_else(|| StatusError::InvalidSensorType { name: s.to_owned() })
    }
}

/// A single measurement, stripped to what classification needs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Reading {
    /// Which sensor produced the value
    pub sensor_type: SensorType,
    /// Measured value in the sensor's unit
    pub value: f64,
}

impl Reading {
    /// Create a reading
    pub const fn new(sensor_type: SensorType, value: f64) -> Self {
        Self { sensor_type, value }
    }
}

/// A reading as it arrives from the data source, with time and origin
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimedReading {
    /// Milliseconds since the Unix epoch
    pub timestamp: Timestamp,
    /// Which sensor produced the value
    pub sensor_type: SensorType,
    /// Measured value
    pub value: f64,
    /// Unit string as reported by the source
    pub unit: String,
    /// Unit the reading belongs to, when the source tags it
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub unit_id: Option<String>,
}

impl TimedReading {
    /// Drop time and origin, keeping only what the classifier looks at
    pub fn reading(&self) -> Reading {
        Reading::new(self.sensor_type, self.value)
    }
}

impl From<&TimedReading> for Reading {
    fn from(timed: &TimedReading) -> Self {
        timed.reading()
    }
}

/// Which readings a history query wants
///
/// Every criterion is optional; an empty filter keeps everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SensorDataFilter {
    /// Keep readings tagged with this unit
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub unit_id: Option<String>,
    /// Keep readings from this sensor
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub sensor_type: Option<SensorType>,
    /// Keep readings taken inside this window
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub time_range: Option<TimeRange>,
}

impl SensorDataFilter {
    /// Restrict to one unit
    pub fn for_unit(mut self, unit_id: impl Into<String>) -> Self {
        self.unit_id = Some(unit_id.into());
        self
    }

    /// Restrict to one sensor type
    pub fn sensor(mut self, sensor_type: SensorType) -> Self {
        self.sensor_type = Some(sensor_type);
        self
    }

    /// Restrict to a time window
    pub fn within(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }

    /// Whether a single reading passes every set criterion
    ///
    /// With a unit criterion, readings that carry no unit tag are dropped.
    pub fn matches(&self, reading: &TimedReading) -> bool {
        let unit_ok = self
            .unit_id
            .as_deref()
            .map_or(true, |id| reading.unit_id.as_deref() == Some(id));
        let sensor_ok = self.sensor_type.map_or(true, |sensor| reading.sensor_type == sensor);
        let time_ok = self.time_range.map_or(true, |range| range.contains(reading.timestamp));

        unit_ok && sensor_ok && time_ok
    }

    /// Matching readings, oldest first
    ///
    /// Readings sharing a timestamp keep their input order.
    pub fn apply<'a>(&self, readings: &'a [TimedReading]) -> Vec<&'a TimedReading> {
        let mut selected: Vec<_> = readings.iter().filter(|r| self.matches(r)).collect();
        selected.sort_by_key(|r| r.timestamp);

        log_trace!("Sensor filter kept {} of {} readings", selected.len(), readings.len());
        selected
    }
}

/// Sensor types a unit has reported, in declaration order
///
/// A unit with no tagged readings offers every type, so a fresh unit still
/// gets a full sensor picker.
pub fn available_sensor_types(readings: &[TimedReading], unit_id: &str) -> Vec<SensorType> {
    let seen: BTreeSet<SensorType> = readings
        .iter()
        .filter(|r| r.unit_id.as_deref() == Some(unit_id))
        .map(|r| r.sensor_type)
        .collect();

    if seen.is_empty() {
        SensorType::ALL.to_vec()
    } else {
        seen.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeRangePreset;

    fn timed(timestamp: Timestamp, sensor_type: SensorType, unit_id: Option<&str>) -> TimedReading {
        TimedReading {
            timestamp,
            sensor_type,
            value: 1.0,
            unit: sensor_type.unit().into(),
            unit_id: unit_id.map(Into::into),
        }
    }

    fn history() -> Vec<TimedReading> {
        vec![
            timed(3_000, SensorType::Co2, Some("unit-1")),
            timed(1_000, SensorType::Co2, Some("unit-1")),
            timed(2_000, SensorType::Temperature, Some("unit-1")),
            timed(2_000, SensorType::Co2, Some("unit-2")),
            timed(5_000, SensorType::Co2, Some("unit-1")),
            timed(2_500, SensorType::Co2, None),
        ]
    }

    #[test]
    fn parses_wire_names() {
        for sensor in SensorType::ALL {
            assert_eq!(sensor.name().parse::<SensorType>(), Ok(sensor));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "humidity".parse::<SensorType>().unwrap_err();
        assert_eq!(err, StatusError::InvalidSensorType { name: "humidity".into() });

        // Names are case-sensitive on the wire
        assert!("CO2".parse::<SensorType>().is_err());
    }

    #[test]
    fn index_matches_declaration_order() {
        for (i, sensor) in SensorType::ALL.iter().enumerate() {
            assert_eq!(sensor.index(), i);
        }
    }

    #[test]
    fn timed_reading_strips_to_reading() {
        let timed = TimedReading {
            timestamp: 1_700_000_000_000,
            sensor_type: SensorType::Airflow,
            value: 45.5,
            unit: "m³/s".into(),
            unit_id: Some("unit-1".into()),
        };

        assert_eq!(Reading::from(&timed), Reading::new(SensorType::Airflow, 45.5));
    }

    #[test]
    fn empty_filter_keeps_everything_sorted() {
        let history = history();
        let times: Vec<_> = SensorDataFilter::default()
            .apply(&history)
            .iter()
            .map(|r| r.timestamp)
            .collect();
        assert_eq!(times, [1_000, 2_000, 2_000, 2_500, 3_000, 5_000]);
    }

    #[test]
    fn filters_by_unit_and_sensor() {
        let history = history();
        let filter = SensorDataFilter::default().for_unit("unit-1").sensor(SensorType::Co2);
        let times: Vec<_> = filter.apply(&history).iter().map(|r| r.timestamp).collect();
        assert_eq!(times, [1_000, 3_000, 5_000]);

        // Untagged readings never match a unit criterion
        let untagged = SensorDataFilter::default().for_unit("unit-1");
        assert!(untagged.apply(&history).iter().all(|r| r.unit_id.is_some()));
    }

    #[test]
    fn window_ends_are_inclusive() {
        let history = history();
        let filter = SensorDataFilter::default()
            .for_unit("unit-1")
            .within(TimeRange::new(1_000, 3_000).unwrap());
        let times: Vec<_> = filter.apply(&history).iter().map(|r| r.timestamp).collect();
        assert_eq!(times, [1_000, 2_000, 3_000]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let history = history();
        let at_2000: Vec<_> = SensorDataFilter::default()
            .within(TimeRange::new(2_000, 2_000).unwrap())
            .apply(&history)
            .into_iter()
            .map(|r| r.sensor_type)
            .collect();
        assert_eq!(at_2000, [SensorType::Temperature, SensorType::Co2]);
    }

    #[test]
    fn preset_window_relative_to_now() {
        let now = 2 * crate::constants::time::MS_PER_HOUR;
        let history = vec![
            timed(0, SensorType::Airflow, Some("unit-1")),
            timed(now - 30 * 60_000, SensorType::Airflow, Some("unit-1")),
            timed(now, SensorType::Airflow, Some("unit-1")),
        ];
        let filter = SensorDataFilter::default().within(TimeRange::last(TimeRangePreset::LastHour, now));
        assert_eq!(filter.apply(&history).len(), 2);
    }

    #[test]
    fn available_types_are_distinct() {
        let history = history();
        assert_eq!(
            available_sensor_types(&history, "unit-1"),
            [SensorType::Co2, SensorType::Temperature]
        );
        assert_eq!(available_sensor_types(&history, "unit-2"), [SensorType::Co2]);
    }

    #[test]
    fn available_types_fall_back_to_all() {
        assert_eq!(available_sensor_types(&history(), "unit-9"), SensorType::ALL);
        assert_eq!(available_sensor_types(&[], "unit-1"), SensorType::ALL);
    }
}
