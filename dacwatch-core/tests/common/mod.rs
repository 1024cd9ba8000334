//! Shared fixtures for integration tests
//!
//! - A small fleet spread over two buildings plus unlocated units
//! - Proptest strategies for sensor types and readings

#![allow(dead_code)]

use dacwatch_core::{get_thresholds, Reading, SensorType, Unit, UnitStatus};
use proptest::prelude::*;

/// Fleet with mixed statuses, duplicate buildings and odd locations
pub fn fleet() -> Vec<Unit> {
    vec![
        Unit::new("unit-1", "DAC Unit Alpha").with_location("Building A, Floor 2"),
        Unit::new("unit-2", "DAC Unit Beta")
            .with_location("Building A, Floor 3")
            .with_status(UnitStatus::Warning),
        Unit::new("unit-3", "DAC Unit Gamma").with_location("Building B, Floor 1"),
        Unit::new("unit-4", "DAC Unit Delta")
            .with_location("Building B, Floor 2")
            .with_status(UnitStatus::Critical),
        Unit::new("unit-5", "DAC Unit Epsilon").with_location("Yard, next to Building C"),
        Unit::new("unit-6", "DAC Unit Zeta"),
    ]
}

/// Readings for one unit, all healthy
pub fn healthy_readings() -> Vec<Reading> {
    vec![
        Reading::new(SensorType::Co2, 420.0),
        Reading::new(SensorType::Temperature, 25.0),
        Reading::new(SensorType::Airflow, 45.0),
        Reading::new(SensorType::Efficiency, 85.0),
    ]
}

pub fn sensor_type() -> impl Strategy<Value = SensorType> {
    prop::sample::select(SensorType::ALL.to_vec())
}

/// Values from well below min to well above max for the sensor
pub fn reading() -> impl Strategy<Value = Reading> {
    sensor_type().prop_flat_map(|sensor| {
        let t = get_thresholds(sensor);
        let span = t.max() - t.min();
        ((t.min() - span)..(t.max() + span)).prop_map(move |value| Reading::new(sensor, value))
    })
}

pub fn readings(max_len: usize) -> impl Strategy<Value = Vec<Reading>> {
    prop::collection::vec(reading(), 0..max_len)
}
