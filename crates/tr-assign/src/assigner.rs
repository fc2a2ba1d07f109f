//! The greedy assignment pass.

use tracing::{debug, info};
use tr_core::{DriverId, RosterConfig, RosterResult};
use tr_shift::Driver;
use tr_timetable::{Coverage, Shortfall, Timetable, TimetableGenerator};

use crate::{BusOccupancy, Roster, ShiftPolicy, WeekdayBias};

/// Runs the greedy bus-and-driver assignment for one configuration.
pub struct Assigner<'a> {
    config: &'a RosterConfig,
}

impl<'a> Assigner<'a> {
    pub fn new(config: &'a RosterConfig) -> Self {
        Self { config }
    }

    /// Assign buses and drivers to every open route of `timetable`.
    ///
    /// Routes already settled on entry are left untouched.  On return no
    /// route is `Open`: each is either driven or flagged with a
    /// [`Shortfall`].
    ///
    /// A bus is offered to a route only when its held span and the routes
    /// already driven on it that day are both clear of the route.  Routes on
    /// days beyond `config.week` are never worked, so their drivers leave
    /// them `Unclaimed`.
    pub fn assign<P: ShiftPolicy>(&self, mut timetable: Timetable, policy: &mut P) -> Roster {
        let config = self.config;
        let mut occupancy = BusOccupancy::new(config, timetable.day_count());
        let mut drivers: Vec<Driver> = Vec::new();

        for r in timetable.refs() {
            let route = timetable.route(r);
            if !route.is_open() {
                continue;
            }
            let span = route.span;

            let free = occupancy.free_slot_where(r.day, &span, |slot| {
                timetable.slot_free(r.day, slot, &span)
            });
            let Some(slot) = free else {
                timetable.set_coverage(r, Coverage::Uncovered(Shortfall::NoFreeBus));
                continue;
            };

            let Some(kind) = policy.choose(r.day, &config.week) else {
                timetable.set_coverage(r, Coverage::Uncovered(Shortfall::NoShiftChoice));
                continue;
            };

            let id = DriverId(drivers.len() as u32);
            let mut driver = Driver::new(id, kind, r, slot, &timetable, config);
            let claimed = driver.claim_week(&mut timetable);

            let held = driver.occupancy(config.turnaround_mins);
            for day in driver.working_days() {
                occupancy.hold(day, slot, held);
            }

            if timetable.route(r).is_open() {
                timetable.set_coverage(r, Coverage::Uncovered(Shortfall::Unclaimed));
            }

            debug!(driver = %id, %kind, %slot, anchor = %r, claimed, "hired driver");
            drivers.push(driver);
        }

        let roster = Roster::new(timetable, drivers);
        info!(
            drivers = roster.driver_count(),
            driven = roster.covered_count(),
            uncovered = roster.uncovered_count(),
            "assignment pass complete"
        );
        roster
    }
}

/// Generate the timetable for `config` and assign it with [`WeekdayBias`].
pub fn greedy_roster(config: &RosterConfig) -> RosterResult<Roster> {
    let timetable = TimetableGenerator::new(config)?.generate();
    Ok(Assigner::new(config).assign(timetable, &mut WeekdayBias))
}
