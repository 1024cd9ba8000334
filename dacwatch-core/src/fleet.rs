//! Fleet overview
//!
//! The numbers behind the dashboard landing page: how many units sit in each
//! status, which ones need attention now, and which buildings can be
//! filtered on. All of it is derived from a unit list and an optional
//! building filter.

use crate::format::pluralize;
use crate::status::UnitStatus;
use crate::units::{filter_units_by_building, get_buildings_from_units, Unit};

/// Unit count per status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    /// Units currently healthy
    pub healthy: usize,
    /// Units currently in warning
    pub warning: usize,
    /// Units currently critical
    pub critical: usize,
}

impl StatusCounts {
    /// Tally the units by status
    pub fn from_units<'a, I>(units: I) -> Self
    where
        I: IntoIterator<Item = &'a Unit>,
    {
        units.into_iter().fold(Self::default(), |mut counts, unit| {
            *counts.get_mut(unit.status) += 1;
            counts
        })
    }

    /// Count for one status
    pub const fn get(&self, status: UnitStatus) -> usize {
        match status {
            UnitStatus::Healthy => self.healthy,
            UnitStatus::Warning => self.warning,
            UnitStatus::Critical => self.critical,
        }
    }

    fn get_mut(&mut self, status: UnitStatus) -> &mut usize {
        match status {
            UnitStatus::Healthy => &mut self.healthy,
            UnitStatus::Warning => &mut self.warning,
            UnitStatus::Critical => &mut self.critical,
        }
    }

    /// Units counted
    pub const fn total(&self) -> usize {
        self.healthy + self.warning + self.critical
    }
}

/// Dashboard summary for one building filter
#[derive(Debug, Clone)]
pub struct FleetOverview<'a> {
    /// Units that passed the building filter, in input order
    pub units: Vec<&'a Unit>,
    /// Status tally of `units`
    pub counts: StatusCounts,
    /// Critical units among `units`, in input order
    pub critical_units: Vec<&'a Unit>,
    /// Every building across the whole fleet, for the filter control
    pub buildings: Vec<&'a str>,
}

impl<'a> FleetOverview<'a> {
    /// Build the overview, narrowing to `building` when given
    pub fn new(units: &'a [Unit], building: Option<&str>) -> Self {
        let filtered = filter_units_by_building(units, building);
        let counts = StatusCounts::from_units(filtered.iter().copied());
        let critical_units = filtered
            .iter()
            .copied()
            .filter(|unit| unit.status == UnitStatus::Critical)
            .collect();

        Self {
            units: filtered,
            counts,
            critical_units,
            buildings: get_buildings_from_units(units),
        }
    }

    /// Banner text when any unit is critical
    pub fn critical_alert(&self) -> Option<String> {
        match self.critical_units.len() {
            0 => None,
            n => Some(format!(
                "{n} {} in critical status. Immediate attention required.",
                pluralize(n as u64, "unit")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Unit> {
        vec![
            Unit::new("unit-1", "Alpha").with_location("Building A, Floor 2"),
            Unit::new("unit-2", "Beta")
                .with_location("Building A, Floor 3")
                .with_status(UnitStatus::Warning),
            Unit::new("unit-3", "Gamma").with_location("Building B, Floor 1"),
            Unit::new("unit-4", "Delta")
                .with_location("Building B, Floor 2")
                .with_status(UnitStatus::Critical),
        ]
    }

    #[test]
    fn counts_every_status() {
        let units = fleet();
        let counts = StatusCounts::from_units(&units);
        assert_eq!(counts, StatusCounts { healthy: 2, warning: 1, critical: 1 });
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(UnitStatus::Warning), 1);
    }

    #[test]
    fn overview_respects_building_filter() {
        let units = fleet();
        let overview = FleetOverview::new(&units, Some("Building A"));

        assert_eq!(overview.units.len(), 2);
        assert_eq!(overview.counts, StatusCounts { healthy: 1, warning: 1, critical: 0 });
        assert!(overview.critical_units.is_empty());
        assert_eq!(overview.critical_alert(), None);
        // Filter choices always cover the whole fleet
        assert_eq!(overview.buildings, ["Building A", "Building B"]);
    }

    #[test]
    fn alert_counts_critical_units() {
        let mut units = fleet();
        let overview = FleetOverview::new(&units, None);
        assert_eq!(
            overview.critical_alert().as_deref(),
            Some("1 unit in critical status. Immediate attention required.")
        );

        units[0].status = UnitStatus::Critical;
        let overview = FleetOverview::new(&units, None);
        assert_eq!(overview.critical_units.len(), 2);
        assert_eq!(overview.critical_units[0].id, "unit-1");
        assert_eq!(
            overview.critical_alert().as_deref(),
            Some("2 units in critical status. Immediate attention required.")
        );
    }
}
