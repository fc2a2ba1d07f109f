//! `Timetable`: the week's routes plus the forward link table.
//!
//! # Layout
//!
//! Routes are stored per day in calendar order, each day's list sorted by
//! start time (the generator emits them that way).  The forward links live
//! in a parallel table of the same shape:
//!
//! ```text
//! days[d]  : Vec<Route>
//! links[d] : Vec<Option<usize>>   // index into days[d + 1]
//! ```
//!
//! Keeping links out of `Route` means a route never owns or borrows another
//! route; cloning a timetable (one per fitness task) is a plain deep copy.

use tr_core::{DayId, SlotId, Span};

use crate::{Coverage, Route, RouteRef};

/// The week's routes, keyed by day, with day-to-day chains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timetable {
    days:  Vec<Vec<Route>>,
    links: Vec<Vec<Option<usize>>>,
}

impl Timetable {
    /// Build a timetable from per-day route lists (calendar order) and link
    /// consecutive days.
    ///
    /// Each day's routes must already be sorted by start time.
    pub fn from_days(days: Vec<Vec<Route>>) -> Self {
        debug_assert!(
            days.iter()
                .all(|d| d.windows(2).all(|w| w[0].start() <= w[1].start())),
            "each day's routes must be sorted by start time"
        );
        let links = days.iter().map(|d| vec![None; d.len()]).collect();
        let mut timetable = Self { days, links };
        timetable.link_days();
        timetable
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of routes across the week.
    pub fn route_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.route_count() == 0
    }

    /// Read-only slice of one day's routes, or an empty slice for an
    /// out-of-range day.
    pub fn routes(&self, day: DayId) -> &[Route] {
        self.days.get(day.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// # Panics
    /// Panics if `r` does not address a route of this timetable.
    #[inline]
    pub fn route(&self, r: RouteRef) -> &Route {
        &self.days[r.day.index()][r.index]
    }

    #[inline]
    pub fn set_coverage(&mut self, r: RouteRef, coverage: Coverage) {
        self.days[r.day.index()][r.index].coverage = coverage;
    }

    /// The same-slot route on the following day, if one exists.
    #[inline]
    pub fn next_in_chain(&self, r: RouteRef) -> Option<RouteRef> {
        let j = self.links[r.day.index()][r.index]?;
        Some(RouteRef::new(DayId(r.day.0 + 1), j))
    }

    /// `r` followed by every route reachable through forward links.
    pub fn chain(&self, r: RouteRef) -> impl Iterator<Item = RouteRef> + '_ {
        std::iter::successors(Some(r), move |&cur| self.next_in_chain(cur))
    }

    /// Every route in day-then-time order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteRef, &Route)> + '_ {
        self.days.iter().enumerate().flat_map(|(d, routes)| {
            routes
                .iter()
                .enumerate()
                .map(move |(i, route)| (RouteRef::new(DayId(d as u8), i), route))
        })
    }

    /// Addresses of every route in day-then-time order.
    pub fn refs(&self) -> Vec<RouteRef> {
        self.iter().map(|(r, _)| r).collect()
    }

    /// `true` if no route driven on `slot` that day overlaps `span`.
    pub fn slot_free(&self, day: DayId, slot: SlotId, span: &Span) -> bool {
        self.routes(day)
            .iter()
            .all(|route| route.slot() != Some(slot) || !route.span.overlaps(span))
    }

    pub fn count_open(&self) -> usize {
        self.iter().filter(|(_, route)| route.is_open()).count()
    }

    pub fn count_driven(&self) -> usize {
        self.iter().filter(|(_, route)| route.is_driven()).count()
    }

    /// Reset every route to `Open`, keeping the routes and links.
    pub fn clear_coverage(&mut self) {
        for route in self.days.iter_mut().flatten() {
            route.coverage = Coverage::Open;
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────

    /// Link each route to the first route of the next day with an identical
    /// span.  At most one link per route.
    fn link_days(&mut self) {
        for d in 1..self.days.len() {
            let (earlier, later) = self.days.split_at(d);
            let today = &earlier[d - 1];
            let tomorrow = &later[0];
            for (i, route) in today.iter().enumerate() {
                self.links[d - 1][i] = tomorrow.iter().position(|next| next.span == route.span);
            }
        }
    }
}
