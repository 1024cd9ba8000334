//! Custom Thresholds Example
//!
//! Loads site-specific threshold overrides from JSON and compares how the
//! same readings classify under the default and the site table.
//!
//! ## Running the Example
//!
//! ```bash
//! RUST_LOG=debug cargo run --example 02_custom_thresholds
//! ```

use dacwatch_core::{Reading, SensorType, StatusError, ThresholdTable};

// Hot plant room with oversized fans
const SITE_CONFIG: &str = r#"{
    "temperature": { "min": -10, "max": 60, "warningMin": 0, "warningMax": 50 },
    "airflow":     { "min": 0, "max": 150, "warningMin": 20, "warningMax": 120 }
}"#;

fn main() -> Result<(), StatusError> {
    env_logger::init();

    println!("DACWatch Custom Thresholds Example");
    println!("==================================\n");

    let defaults = ThresholdTable::default();
    let site = ThresholdTable::from_json(SITE_CONFIG)?;

    for sensor in SensorType::ALL {
        let d = defaults.get(sensor);
        let s = site.get(sensor);
        println!(
            "{:<20} default [{}, {}]  site [{}, {}]",
            sensor.display_name(),
            d.min(),
            d.max(),
            s.min(),
            s.max()
        );
    }
    println!();

    let readings = [
        Reading::new(SensorType::Co2, 450.0),
        Reading::new(SensorType::Temperature, 45.0),
        Reading::new(SensorType::Airflow, 110.0),
    ];

    println!("Unit status with default thresholds: {}", defaults.determine_unit_status(&readings));
    println!("Unit status with site thresholds:    {}", site.determine_unit_status(&readings));

    // A misordered override is rejected, not silently clamped
    let bad = r#"{ "co2": { "min": 0, "max": 1000, "warningMin": 900, "warningMax": 500 } }"#;
    match ThresholdTable::from_json(bad) {
        Ok(_) => println!("\nUnexpectedly accepted bad configuration"),
        Err(e) => println!("\nRejected bad configuration: {e}"),
    }

    Ok(())
}
