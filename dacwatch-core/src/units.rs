//! DAC units and building grouping
//!
//! Locations are free text written by site staff, e.g. `"Building A, Floor 2"`.
//! The only structure the dashboard relies on is a leading building token:
//! the word `Building`, whitespace, and one letter. Anything else about the
//! location is opaque, and a location without the token is simply ungrouped.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensors::Reading;
use crate::status::{self, UnitStatus};
use crate::thresholds::ThresholdTable;
use crate::time::Timestamp;

/// A monitored Direct Air Capture unit
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Unit {
    /// Stable identifier from the data source
    pub id: String,
    /// Display name
    pub name: String,
    /// Last aggregated status
    pub status: UnitStatus,
    /// Free-text location, optionally starting with a building token
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub location: Option<String>,
    /// When the status was last refreshed (ms since epoch)
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub last_updated: Option<Timestamp>,
}

impl Unit {
    /// Create a healthy unit with no location
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: UnitStatus::Healthy,
            location: None,
            last_updated: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the status directly
    pub fn with_status(mut self, status: UnitStatus) -> Self {
        self.status = status;
        self
    }

    /// Building token of this unit's location, if any
    pub fn building(&self) -> Option<&str> {
        extract_building(self.location.as_deref())
    }

    /// Recompute status from fresh readings and stamp the update time
    pub fn refresh_status(&mut self, readings: &[Reading], table: &ThresholdTable, now: Timestamp) -> UnitStatus {
        let status = status::aggregate(table, readings);
        if status != self.status {
            log_debug!("Unit {} status {} -> {}", self.id, self.status, status);
        }
        self.status = status;
        self.last_updated = Some(now);
        status
    }
}

fn building_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?i:building)\s+[A-Za-z]").expect("building pattern is valid"))
}

/// Leading building token of a location string
///
/// Anchored at the start. The word matches in any case and the letter may be
/// any ASCII letter; the returned slice is the text exactly as it appears in
/// the input.
///
/// ```
/// use dacwatch_core::extract_building;
///
/// assert_eq!(extract_building(Some("Building A, Floor 2")), Some("Building A"));
/// assert_eq!(extract_building(Some("Floor 2, Building A")), None);
/// assert_eq!(extract_building(None), None);
/// ```
pub fn extract_building(location: Option<&str>) -> Option<&str> {
    let location = location?;
    building_pattern().find(location).map(|m| m.as_str())
}

/// Units in the given building, in input order
///
/// `None` means no filter: every unit is returned, order preserved.
/// Building tokens are compared exactly, so `"building a"` and
/// `"Building A"` are different buildings.
pub fn filter_units_by_building<'a>(units: &'a [Unit], building: Option<&str>) -> Vec<&'a Unit> {
    match building {
        None => units.iter().collect(),
        Some(wanted) => units
            .iter()
            .filter(|unit| unit.building() == Some(wanted))
            .collect(),
    }
}

/// Distinct building tokens across the units, sorted ascending
pub fn get_buildings_from_units(units: &[Unit]) -> Vec<&str> {
    units
        .iter()
        .filter_map(Unit::building)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
