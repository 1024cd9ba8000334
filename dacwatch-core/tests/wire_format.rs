//! JSON shape of the records exchanged with the data source

#![cfg(feature = "serde")]

use dacwatch_core::test_runs::{TestMetric, TestResults, TestRun, TestRunStatus};
use dacwatch_core::{
    determine_unit_status, Reading, SensorDataFilter, SensorType, TimeRange, TimeRangePreset, TimedReading, Unit,
    UnitStatus,
};
use serde_json::json;

#[test]
fn readings_use_camel_case_and_lowercase_sensor_names() {
    let body = json!([
        { "timestamp": 1_700_000_000_000u64, "sensorType": "co2", "value": 1200.0, "unit": "ppm", "unitId": "unit-1" },
        { "timestamp": 1_700_000_000_000u64, "sensorType": "temperature", "value": 21.0, "unit": "°C" }
    ]);

    let timed: Vec<TimedReading> = serde_json::from_value(body).unwrap();
    assert_eq!(timed[1].unit_id, None);

    let readings: Vec<Reading> = timed.iter().map(Reading::from).collect();
    assert_eq!(determine_unit_status(&readings), UnitStatus::Critical);
}

#[test]
fn unknown_sensor_is_rejected() {
    let body = json!({ "sensorType": "humidity", "value": 40.0 });
    assert!(serde_json::from_value::<Reading>(body).is_err());
}

#[test]
fn unit_round_trip() {
    let unit = Unit::new("unit-2", "DAC Unit Beta")
        .with_location("Building A, Floor 3")
        .with_status(UnitStatus::Warning);

    let value = serde_json::to_value(&unit).unwrap();
    assert_eq!(
        value,
        json!({ "id": "unit-2", "name": "DAC Unit Beta", "status": "warning", "location": "Building A, Floor 3" })
    );
    assert_eq!(serde_json::from_value::<Unit>(value).unwrap(), unit);
}

#[test]
fn unit_without_location() {
    let unit: Unit = serde_json::from_value(json!({ "id": "u", "name": "n", "status": "critical" })).unwrap();
    assert_eq!(unit.location, None);
    assert_eq!(unit.building(), None);
}

#[test]
fn test_run_shape() {
    let mut run = TestRun::pending("test-1", "unit-1", 1_000);
    run.complete(TestResults::evaluate(vec![TestMetric::system_pressure(1.2)]), 2_000);

    let value = serde_json::to_value(&run).unwrap();
    assert_eq!(value["unitId"], "unit-1");
    assert_eq!(value["status"], "completed");
    assert_eq!(value["completedAt"], 2_000);
    assert_eq!(value["results"]["passed"], true);
    assert_eq!(value["results"]["metrics"][0]["threshold"], json!({ "min": 0.8, "max": 2.0 }));
    assert!(value.get("error").is_none());

    let pending: TestRun = serde_json::from_value(json!({
        "id": "test-2", "unitId": "unit-1", "status": "pending", "startedAt": 5
    }))
    .unwrap();
    assert_eq!(pending.status, TestRunStatus::Pending);
}

#[test]
fn sensor_type_serializes_by_name() {
    assert_eq!(serde_json::to_value(SensorType::Efficiency).unwrap(), json!("efficiency"));
}

#[test]
fn filter_uses_camel_case_and_skips_unset_criteria() {
    let filter = SensorDataFilter::default()
        .for_unit("unit-1")
        .within(TimeRange::new(1_000, 2_000).unwrap());
    assert_eq!(
        serde_json::to_value(&filter).unwrap(),
        json!({ "unitId": "unit-1", "timeRange": { "start": 1_000, "end": 2_000 } })
    );

    let parsed: SensorDataFilter = serde_json::from_value(json!({ "sensorType": "airflow" })).unwrap();
    assert_eq!(parsed, SensorDataFilter::default().sensor(SensorType::Airflow));
}

#[test]
fn reversed_time_range_is_rejected() {
    let body = json!({ "timeRange": { "start": 2_000, "end": 1_000 } });
    assert!(serde_json::from_value::<SensorDataFilter>(body).is_err());
}

#[test]
fn presets_serialize_by_key() {
    assert_eq!(serde_json::to_value(TimeRangePreset::Last7Days).unwrap(), json!("7d"));
    let preset: TimeRangePreset = serde_json::from_value(json!("1h")).unwrap();
    assert_eq!(preset, TimeRangePreset::LastHour);
}
