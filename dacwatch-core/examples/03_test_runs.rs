//! Test Runs Example
//!
//! Builds a history of synthetic test runs for one unit and prints each
//! run's outcome with its graded metrics.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_test_runs --features mock
//! ```

use dacwatch_core::{
    format::{format_duration, format_relative_time, format_sensor_value},
    mock::MockGenerator,
    time::{SystemTime, TimeSource},
};

fn main() {
    env_logger::init();

    println!("DACWatch Test Runs Example");
    println!("==========================\n");

    let now = SystemTime.now();
    let mut generator = MockGenerator::new(7);

    for run in generator.test_runs("unit-1", 5, now) {
        println!("{} [{}] started {}", run.id, run.status, format_relative_time(run.started_at, now));

        if let Some(ms) = run.duration_ms() {
            println!("  took {}", format_duration(ms));
        }
        if let Some(error) = &run.error {
            println!("  error: {error}");
        }
        if let Some(results) = &run.results {
            println!("  {} - {}", if results.passed { "PASS" } else { "FAIL" }, results.summary);
            for metric in &results.metrics {
                let mark = if metric.within_threshold() { "ok " } else { "OUT" };
                println!("    {mark} {:<18} {}", metric.name, format_sensor_value(metric.value, &metric.unit, 1));
            }
        }
        println!();
    }
}
