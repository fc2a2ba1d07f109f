//! Timetable generator.
//!
//! For each day a cursor sweeps from opening to closing time.  At every step
//! the routes still running at the cursor are counted, and a new route is
//! spawned at the cursor if fewer than the regime's target are running and
//! the route would finish by closing time.  The cursor then advances by the
//! regime's interval:
//!
//! ```text
//! target   = floor(workload_ratio * fleet_size)
//! interval = route_duration / target          (integer minutes)
//! ```
//!
//! The peak regime applies only inside a peak window and never on weekend
//! days.  Generation is fully deterministic.

use tracing::{debug, info};
use tr_core::{ClockTime, DayId, RosterConfig, RosterResult, SweepPlan};

use crate::{Route, Timetable};

/// Builds the weekly [`Timetable`] for a validated [`RosterConfig`].
pub struct TimetableGenerator<'a> {
    config: &'a RosterConfig,
    plan:   SweepPlan,
}

impl<'a> TimetableGenerator<'a> {
    /// Validate `config` and derive the sweep regimes.
    ///
    /// Fails with a configuration error before any interval arithmetic when
    /// a regime's target rounds down to zero buses.
    pub fn new(config: &'a RosterConfig) -> RosterResult<Self> {
        let plan = config.validate()?;
        Ok(Self { config, plan })
    }

    pub fn plan(&self) -> SweepPlan {
        self.plan
    }

    /// Generate every day and link identical slots on consecutive days.
    pub fn generate(&self) -> Timetable {
        let days: Vec<Vec<Route>> = self
            .config
            .week
            .day_ids()
            .map(|day| self.generate_day(day))
            .collect();
        let timetable = Timetable::from_days(days);
        info!(
            fleet_size = self.config.fleet_size,
            routes = timetable.route_count(),
            "generated timetable"
        );
        timetable
    }

    /// Sweep one day from `open` to `close`.
    pub fn generate_day(&self, day: DayId) -> Vec<Route> {
        let duration = self.config.route_duration_mins;
        let mut cursor: ClockTime = self.config.open;
        let mut routes: Vec<Route> = Vec::new();
        // Indices into `routes` of the routes still running at the cursor.
        let mut active: Vec<usize> = Vec::new();

        while cursor < self.config.close {
            let regime = if self.config.is_peak(day, cursor) {
                self.plan.peak
            } else {
                self.plan.off_peak
            };

            active.retain(|&i| routes[i].end() > cursor);

            if active.len() < regime.target && cursor + duration <= self.config.close {
                active.push(routes.len());
                routes.push(Route::new(day, cursor, duration));
            }

            cursor = cursor + regime.interval_mins;
        }

        debug!(day = self.config.week.name(day), routes = routes.len(), "generated day");
        routes
    }
}
