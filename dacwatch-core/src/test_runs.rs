//! Test runs
//!
//! An operator can trigger a test run on a unit. The run collects a handful
//! of process metrics and passes only if every metric sits inside its
//! acceptance bounds. This module models the run lifecycle and grades the
//! collected metrics; triggering and polling belong to the caller.
//!
//! ```
//! use dacwatch_core::test_runs::{TestMetric, TestResults};
//!
//! let results = TestResults::evaluate(vec![
//!     TestMetric::capture_rate(85.5),
//!     TestMetric::energy_efficiency(92.3),
//!     TestMetric::system_pressure(2.5),
//! ]);
//!
//! assert!(!results.passed);
//! assert_eq!(results.failing_metrics().count(), 1);
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::acceptance::*;
use crate::time::Timestamp;

/// Summary written when every metric passed
pub const SUMMARY_PASSED: &str = "All systems operating within normal parameters.";

/// Summary written when any metric failed
pub const SUMMARY_FAILED: &str = "Some metrics exceeded acceptable thresholds.";

/// Lifecycle state of a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TestRunStatus {
    /// Queued, not started
    #[default]
    Pending,
    /// Collecting metrics
    Running,
    /// Finished with results
    Completed,
    /// Aborted with an error
    Failed,
}

impl TestRunStatus {
    /// Completed and failed runs never change again
    pub const fn is_terminal(&self) -> bool {
        matches!(self, TestRunStatus::Completed | TestRunStatus::Failed)
    }

    /// Wire name
    pub const fn name(&self) -> &'static str {
        match self {
            TestRunStatus::Pending => "pending",
            TestRunStatus::Running => "running",
            TestRunStatus::Completed => "completed",
            TestRunStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TestRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Acceptance bounds for a metric; a missing side is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricThreshold {
    /// Inclusive lower bound
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub min: Option<f64>,
    /// Inclusive upper bound
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub max: Option<f64>,
}

impl MetricThreshold {
    /// Both bounds
    pub const fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Inclusive check against whichever bounds are set
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// One measured quantity from a test run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TestMetric {
    /// Display name
    pub name: String,
    /// Measured value
    pub value: f64,
    /// Unit of `value`
    pub unit: String,
    /// Acceptance bounds, if the metric is graded
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub threshold: Option<MetricThreshold>,
}

impl TestMetric {
    /// A graded metric
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>, threshold: MetricThreshold) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            threshold: Some(threshold),
        }
    }

    /// CO₂ capture rate, accepted between 70 and 100 %
    pub fn capture_rate(value: f64) -> Self {
        Self::new(
            "CO₂ Capture Rate",
            value,
            "%",
            MetricThreshold::between(CAPTURE_RATE_MIN_PCT, CAPTURE_RATE_MAX_PCT),
        )
    }

    /// Energy efficiency, accepted between 80 and 100 %
    pub fn energy_efficiency(value: f64) -> Self {
        Self::new(
            "Energy Efficiency",
            value,
            "%",
            MetricThreshold::between(ENERGY_EFFICIENCY_MIN_PCT, ENERGY_EFFICIENCY_MAX_PCT),
        )
    }

    /// System pressure, accepted between 0.8 and 2.0 bar
    pub fn system_pressure(value: f64) -> Self {
        Self::new(
            "System Pressure",
            value,
            "bar",
            MetricThreshold::between(SYSTEM_PRESSURE_MIN_BAR, SYSTEM_PRESSURE_MAX_BAR),
        )
    }

    /// Ungraded metrics always pass
    pub fn within_threshold(&self) -> bool {
        self.threshold.map_or(true, |t| t.contains(self.value))
    }
}

/// Graded outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TestResults {
    /// Every metric within its bounds
    pub passed: bool,
    /// Metrics in collection order
    pub metrics: Vec<TestMetric>,
    /// One-line verdict
    pub summary: String,
}

impl TestResults {
    /// Grade a set of metrics; an empty set passes
    pub fn evaluate(metrics: Vec<TestMetric>) -> Self {
        let passed = metrics.iter().all(TestMetric::within_threshold);
        let summary = if passed { SUMMARY_PASSED } else { SUMMARY_FAILED };

        Self {
            passed,
            metrics,
            summary: summary.to_owned(),
        }
    }

    /// Metrics outside their bounds
    pub fn failing_metrics(&self) -> impl Iterator<Item = &TestMetric> {
        self.metrics.iter().filter(|m| !m.within_threshold())
    }
}

/// A test run against one unit
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TestRun {
    /// Run identifier
    pub id: String,
    /// Unit under test
    pub unit_id: String,
    /// Lifecycle state
    pub status: TestRunStatus,
    /// Start time (ms since epoch)
    pub started_at: Timestamp,
    /// End time, set once the run is terminal
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub completed_at: Option<Timestamp>,
    /// Graded metrics for completed runs
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub results: Option<TestResults>,
    /// Failure reason for failed runs
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl TestRun {
    /// A pending run
    pub fn pending(id: impl Into<String>, unit_id: impl Into<String>, started_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            unit_id: unit_id.into(),
            status: TestRunStatus::Pending,
            started_at,
            completed_at: None,
            results: None,
            error: None,
        }
    }

    /// Finish with graded results
    pub fn complete(&mut self, results: TestResults, at: Timestamp) {
        self.status = TestRunStatus::Completed;
        self.results = Some(results);
        self.error = None;
        self.completed_at = Some(at);
    }

    /// Abort with an error
    pub fn fail(&mut self, error: impl Into<String>, at: Timestamp) {
        self.status = TestRunStatus::Failed;
        self.error = Some(error.into());
        self.completed_at = Some(at);
    }

    /// Wall time of a finished run
    pub fn duration_ms(&self) -> Option<u64> {
        self.completed_at.map(|end| end.saturating_sub(self.started_at))
    }

    /// Completed and every metric passed
    pub fn passed(&self) -> bool {
        self.status == TestRunStatus::Completed && self.results.as_ref().is_some_and(|r| r.passed)
    }
}
