//! Plain data row types written by output backends.

use tr_assign::Roster;
use tr_core::{ClockTime, WeekCalendar};
use tr_search::GenerationStats;
use tr_timetable::{Coverage, Shortfall};

/// One route of the final roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub day:    String,
    pub start:  ClockTime,
    pub end:    ClockTime,
    /// `None` for routes without a driver.
    pub driver: Option<u32>,
    pub slot:   Option<u32>,
    pub status: &'static str,
}

/// Fitness summary for one search generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRow {
    pub generation: u64,
    pub best:       f64,
    pub mean:       f64,
    pub worst:      f64,
}

impl From<&GenerationStats> for GenerationRow {
    fn from(stats: &GenerationStats) -> Self {
        Self {
            generation: stats.generation as u64,
            best:       stats.best,
            mean:       stats.mean,
            worst:      stats.worst,
        }
    }
}

/// Machine-readable status of a route's coverage.
pub fn status_label(coverage: Coverage) -> &'static str {
    match coverage {
        Coverage::Open                                  => "open",
        Coverage::Driven { .. }                         => "driven",
        Coverage::Uncovered(Shortfall::NoFreeBus)       => "no_free_bus",
        Coverage::Uncovered(Shortfall::NoShiftChoice)   => "no_shift_choice",
        Coverage::Uncovered(Shortfall::Unclaimed)       => "unclaimed",
    }
}

/// Flatten `roster` into one row per route, in day-then-time order.
pub fn rows_from_roster(roster: &Roster, week: &WeekCalendar) -> Vec<RosterRow> {
    roster
        .timetable
        .iter()
        .map(|(r, route)| RosterRow {
            day:    week.name(r.day).to_owned(),
            start:  route.start(),
            end:    route.end(),
            driver: route.driver().map(|d| d.0),
            slot:   route.slot().map(|s| s.0),
            status: status_label(route.coverage),
        })
        .collect()
}
