//! Fleet Status Example
//!
//! Generates a synthetic snapshot for every unit in the demo fleet, derives
//! each unit's status from its readings, and prints the dashboard overview.
//!
//! ## Running the Example
//!
//! ```bash
//! RUST_LOG=debug cargo run --example 01_fleet_status --features mock
//! ```

use dacwatch_core::{
    format::{format_reading, format_relative_time},
    mock::MockGenerator,
    time::{SystemTime, TimeSource},
    FleetOverview, Reading, SensorDataFilter, SensorType, ThresholdTable, TimeRange, TimeRangePreset,
};

fn main() {
    env_logger::init();

    println!("DACWatch Fleet Status");
    println!("=====================\n");

    let now = SystemTime.now();
    let table = ThresholdTable::default();
    let mut generator = MockGenerator::new(now);
    let mut units = generator.units(now);

    for unit in &mut units {
        let mut readings: Vec<Reading> = generator
            .snapshot(&unit.id, now)
            .iter()
            .map(Reading::from)
            .collect();

        // Push Delta's intake over the CO₂ limit so the alert path shows up
        if unit.id == "unit-4" {
            readings.push(Reading::new(SensorType::Co2, 1150.0));
        }

        let previous = unit.last_updated;
        let status = unit.refresh_status(&readings, &table, now);

        println!("{} ({})", unit.name, unit.location.as_deref().unwrap_or("unknown location"));
        for reading in &readings {
            println!(
                "  {:<20} {:>12}  {}",
                reading.sensor_type.display_name(),
                format_reading(reading, 1),
                table.classify(reading.value, reading.sensor_type)
            );
        }
        if let Some(previous) = previous {
            println!("  previous update: {}", format_relative_time(previous, now));
        }
        println!("  => {} ({})\n", status.label(), status.color());
    }

    let overview = FleetOverview::new(&units, None);
    println!("Buildings: {}", overview.buildings.join(", "));
    println!(
        "Healthy: {}  Warning: {}  Critical: {}",
        overview.counts.healthy, overview.counts.warning, overview.counts.critical
    );
    if let Some(alert) = overview.critical_alert() {
        println!("\n!! {alert}");
    }

    for &building in &overview.buildings {
        let scoped = FleetOverview::new(&units, Some(building));
        println!("  {building}: {} units, {} critical", scoped.units.len(), scoped.counts.critical);
    }

    let history = generator.readings(
        SensorType::Co2,
        "unit-1",
        TimeRange::last(TimeRangePreset::Last6Hours, now),
        30,
    );
    let preset = TimeRangePreset::LastHour;
    let recent = SensorDataFilter::default()
        .for_unit("unit-1")
        .within(TimeRange::last(preset, now))
        .apply(&history);
    println!("\nDAC Unit Alpha CO₂, {}:", preset.label());
    for reading in recent {
        println!("  {:>16}  {:.1} {}", format_relative_time(reading.timestamp, now), reading.value, reading.unit);
    }
}
