//! `Roster`: the annotated timetable plus the driver registry.

use tr_core::{DayId, DriverId, SlotId};
use tr_shift::Driver;
use tr_timetable::{RouteRef, Shortfall, Timetable};

/// Result of an assignment pass.
///
/// Routes refer to drivers by [`DriverId`]; resolve them with
/// [`Roster::driver`].
#[derive(Clone, Debug)]
pub struct Roster {
    pub timetable: Timetable,
    /// Indexed by `DriverId`, in hiring order.
    pub drivers:   Vec<Driver>,
}

impl Roster {
    pub fn new(timetable: Timetable, drivers: Vec<Driver>) -> Self {
        Self { timetable, drivers }
    }

    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.get(id.index())
    }

    /// Routes with a driver and a bus.
    pub fn covered_count(&self) -> usize {
        self.timetable.count_driven()
    }

    /// Routes flagged with any shortfall.
    pub fn uncovered_count(&self) -> usize {
        self.timetable.iter().filter(|(_, r)| r.shortfall().is_some()).count()
    }

    pub fn shortfall_count(&self, reason: Shortfall) -> usize {
        self.timetable
            .iter()
            .filter(|(_, r)| r.shortfall() == Some(reason))
            .count()
    }

    /// Driven routes over all routes; 0 for an empty timetable.
    pub fn coverage_ratio(&self) -> f64 {
        let total = self.timetable.route_count();
        if total == 0 {
            return 0.0;
        }
        self.covered_count() as f64 / total as f64
    }

    /// `true` if no route is left `Open`.
    pub fn is_settled(&self) -> bool {
        self.timetable.count_open() == 0
    }

    /// Every route driven by `driver`, in day-then-time order.
    pub fn routes_for_driver(&self, driver: DriverId) -> Vec<RouteRef> {
        self.timetable
            .iter()
            .filter(|(_, r)| r.driver() == Some(driver))
            .map(|(rr, _)| rr)
            .collect()
    }

    /// Every route driven on `slot` on `day`, in time order.
    pub fn routes_on_slot(&self, day: DayId, slot: SlotId) -> Vec<RouteRef> {
        self.timetable
            .routes(day)
            .iter()
            .enumerate()
            .filter(|(_, r)| r.slot() == Some(slot))
            .map(|(i, _)| RouteRef::new(day, i))
            .collect()
    }
}
