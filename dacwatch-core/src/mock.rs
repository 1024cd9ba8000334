//! Synthetic fleet data
//!
//! Stands in for the backend during development and demos. Values follow a
//! slow sine trend (period ~6.3 h) plus uniform noise around a per-sensor
//! base, which keeps most readings healthy with the odd warning. Seeded, so
//! a given seed always produces the same fleet.
//!
//! ```
//! use dacwatch_core::mock::MockGenerator;
//! use dacwatch_core::time::{TimeRange, TimeRangePreset};
//! use dacwatch_core::SensorType;
//!
//! let mut generator = MockGenerator::new(42);
//! let window = TimeRange::last(TimeRangePreset::LastHour, 1_792_141_500_000);
//! let hour = generator.readings(SensorType::Co2, "unit-1", window, 5);
//! assert_eq!(hour.len(), 13);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::time::{MS_PER_HOUR, MS_PER_MINUTE};
use crate::sensors::{SensorType, TimedReading};
use crate::status::UnitStatus;
use crate::test_runs::{TestMetric, TestResults, TestRun, TestRunStatus};
use crate::time::{TimeRange, Timestamp};
use crate::units::Unit;

/// Length of a simulated test run
pub const TEST_RUN_DURATION_MS: u64 = 5 * MS_PER_MINUTE;

/// Error attached to simulated failed runs
pub const TEST_RUN_ERROR: &str = "Test execution encountered an error.";

/// Share of completed runs that pass
const PASS_PROBABILITY: f64 = 0.8;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Typical value and spread for a sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorProfile {
    /// Centre of the generated values
    pub base: f64,
    /// Peak-to-peak width of the noise; the trend swings ±0.3× this
    pub variation: f64,
}

impl SensorProfile {
    /// Profile for a healthy unit
    pub const fn for_sensor(sensor_type: SensorType) -> Self {
        match sensor_type {
            SensorType::Co2 => Self { base: 420.0, variation: 50.0 },
            SensorType::Temperature => Self { base: 25.0, variation: 5.0 },
            SensorType::Airflow => Self { base: 45.0, variation: 10.0 },
            SensorType::Efficiency => Self { base: 85.0, variation: 8.0 },
        }
    }
}

/// Seeded generator for readings, units and test runs
pub struct MockGenerator {
    rng: StdRng,
}

impl MockGenerator {
    /// Generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// One reading every `interval_minutes` across `range`, both ends included
    ///
    /// A zero interval yields no readings.
    pub fn readings(
        &mut self,
        sensor_type: SensorType,
        unit_id: &str,
        range: TimeRange,
        interval_minutes: u64,
    ) -> Vec<TimedReading> {
        let step = interval_minutes.saturating_mul(MS_PER_MINUTE);
        if step == 0 {
            return Vec::new();
        }

        let start = range.start();
        let readings: Vec<_> = (start..=range.end())
            .step_by(step as usize)
            .map(|timestamp| self.reading_at(sensor_type, unit_id, start, timestamp))
            .collect();

        log_trace!("Generated {} {} readings for {}", readings.len(), sensor_type, unit_id);
        readings
    }

    /// Latest reading of every sensor type at `at`
    pub fn snapshot(&mut self, unit_id: &str, at: Timestamp) -> Vec<TimedReading> {
        SensorType::ALL
            .into_iter()
            .map(|sensor_type| self.reading_at(sensor_type, unit_id, at, at))
            .collect()
    }

    fn reading_at(&mut self, sensor_type: SensorType, unit_id: &str, start: Timestamp, at: Timestamp) -> TimedReading {
        let profile = SensorProfile::for_sensor(sensor_type);
        let elapsed_hours = (at - start) as f64 / MS_PER_HOUR as f64;

        let trend = libm::sin(elapsed_hours) * 0.3;
        let noise = (self.rng.random::<f64>() - 0.5) * profile.variation;
        let value = profile.base + trend * profile.variation + noise;

        TimedReading {
            timestamp: at,
            sensor_type,
            value: value.max(0.0),
            unit: sensor_type.unit().to_owned(),
            unit_id: Some(unit_id.to_owned()),
        }
    }

    /// The demo fleet: two units in each of Buildings A and B
    pub fn units(&self, now: Timestamp) -> Vec<Unit> {
        let unit = |id: &str, name: &str, status, location: &str, age_ms: u64| Unit {
            last_updated: Some(now.saturating_sub(age_ms)),
            ..Unit::new(id, name).with_location(location).with_status(status)
        };

        vec![
            unit("unit-1", "DAC Unit Alpha", UnitStatus::Healthy, "Building A, Floor 2", 0),
            unit("unit-2", "DAC Unit Beta", UnitStatus::Warning, "Building A, Floor 3", MS_PER_HOUR),
            unit("unit-3", "DAC Unit Gamma", UnitStatus::Healthy, "Building B, Floor 1", MS_PER_HOUR / 2),
            unit("unit-4", "DAC Unit Delta", UnitStatus::Critical, "Building B, Floor 2", 2 * MS_PER_HOUR),
        ]
    }

    /// A single run that started an hour before `now`
    ///
    /// Completed runs carry graded metrics; about one in five fails grading.
    pub fn test_run(&mut self, unit_id: &str, status: TestRunStatus, now: Timestamp) -> TestRun {
        let started_at = now.saturating_sub(MS_PER_HOUR);
        let mut run = TestRun::pending(self.run_id(now), unit_id, started_at);
        let finished_at = started_at + TEST_RUN_DURATION_MS;

        match status {
            TestRunStatus::Pending => {}
            TestRunStatus::Running => run.status = TestRunStatus::Running,
            TestRunStatus::Completed => {
                let good = self.rng.random_bool(PASS_PROBABILITY);
                let metrics = if good {
                    vec![
                        TestMetric::capture_rate(85.5),
                        TestMetric::energy_efficiency(92.3),
                        TestMetric::system_pressure(1.2),
                    ]
                } else {
                    vec![
                        TestMetric::capture_rate(65.2),
                        TestMetric::energy_efficiency(68.1),
                        TestMetric::system_pressure(2.5),
                    ]
                };
                run.complete(TestResults::evaluate(metrics), finished_at);
            }
            TestRunStatus::Failed => run.fail(TEST_RUN_ERROR, finished_at),
        }

        run
    }

    /// `count` runs an hour apart, newest first
    pub fn test_runs(&mut self, unit_id: &str, count: usize, now: Timestamp) -> Vec<TestRun> {
        const CYCLE: [TestRunStatus; 5] = [
            TestRunStatus::Completed,
            TestRunStatus::Completed,
            TestRunStatus::Completed,
            TestRunStatus::Failed,
            TestRunStatus::Pending,
        ];

        let mut runs: Vec<TestRun> = (0..count)
            .map(|i| {
                let mut run = self.test_run(unit_id, CYCLE[i % CYCLE.len()], now);
                run.started_at = now.saturating_sub((count - i) as u64 * MS_PER_HOUR);
                if run.completed_at.is_some() {
                    run.completed_at = Some(run.started_at + TEST_RUN_DURATION_MS);
                }
                run
            })
            .collect();

        runs.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        runs
    }

    fn run_id(&mut self, now: Timestamp) -> String {
        let suffix: String = (0..9)
            .map(|_| char::from(ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())]))
            .collect();
        format!("test-{now}-{suffix}")
    }
}
