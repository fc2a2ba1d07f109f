//! `Driver`: one shift instance and its week-long claiming pass.
//!
//! # Day bookkeeping
//!
//! Every day starts with a "last claimed end" equal to the anchor start.  A
//! claim on a day moves that day's mark to the claimed route's end, so the
//! driver's routes on any day are strictly sequential.
//!
//! # Claim rules
//!
//! A route can be claimed when all of these hold:
//!
//! - the day is a working day for the driver;
//! - the route is still `Open`;
//! - it starts at or after the day's last claimed end;
//! - it overlaps none of the driver's breaks;
//! - no route already driven on the driver's bus slot that day overlaps it.
//!
//! A route starts a chain when, in addition, it starts before the driver's
//! cutoff.  Chain continuations share the chain start's clock times.

use tracing::trace;
use tr_core::{ClockTime, DayId, DriverId, RosterConfig, SlotId, Span};
use tr_timetable::{Coverage, RouteRef, Timetable};

use crate::ShiftKind;

/// A driver's shift: duty window, breaks, days off, and claim state.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Driver {
    pub id:     DriverId,
    pub kind:   ShiftKind,
    /// Route the shift was hired at.
    pub anchor: RouteRef,
    /// Clock span of the anchor route.  The duty window starts at its start.
    pub anchor_span: Span,
    /// Bus slot the driver holds on every working day.
    pub slot:   SlotId,
    /// Routes must start before this time on every working day.
    pub cutoff: ClockTime,

    /// Indexed by `DayId`; `true` on days off.
    days_off:         Vec<bool>,
    /// Break spans, ordered by start.
    breaks:           Vec<Span>,
    /// Indexed by `DayId`.
    last_claimed_end: Vec<ClockTime>,
    claimed:          usize,
}

impl Driver {
    /// Hire a driver of `kind` anchored at route `anchor` of `timetable`,
    /// holding bus `slot`.
    ///
    /// Derives the cutoff, days off and breaks from `config.shift_rules`.
    /// Breaks that would start or end at or after `config.close` are dropped.
    pub fn new(
        id:        DriverId,
        kind:      ShiftKind,
        anchor:    RouteRef,
        slot:      SlotId,
        timetable: &Timetable,
        config:    &RosterConfig,
    ) -> Self {
        let rules = &config.shift_rules;
        let anchor_span = timetable.route(anchor).span;
        let start = anchor_span.start;
        let week_len = config.week.len();

        let (cutoff, days_off, mut breaks) = match kind {
            ShiftKind::Standard => {
                let days_off = config.week.day_ids().map(|d| config.week.is_weekend(d)).collect();
                let break_start = start + rules.standard_break_offset_mins;
                let breaks = vec![Span::new(break_start, break_start + rules.standard_break_mins)];
                (start + rules.standard_length_mins, days_off, breaks)
            }
            ShiftKind::Rotating => {
                let mut days_off = vec![true; week_len];
                for d in (anchor.day.index()..week_len).step_by(rules.rotating_day_stride) {
                    days_off[d] = false;
                }

                let end = start + rules.rotating_length_mins;
                let mut breaks = Vec::new();
                let mut point = start + rules.rotating_break_every_mins;
                while point < end {
                    breaks.push(Span::new(point - rules.rotating_break_mins, point));
                    point = point + rules.rotating_break_every_mins;
                }
                (end, days_off, breaks)
            }
        };

        breaks.retain(|b| b.start < config.close && b.end < config.close);

        Self {
            id,
            kind,
            anchor,
            anchor_span,
            slot,
            cutoff,
            days_off,
            breaks,
            last_claimed_end: vec![start; week_len],
            claimed: 0,
        }
    }

    pub fn breaks(&self) -> &[Span] {
        &self.breaks
    }

    #[inline]
    pub fn works_on(&self, day: DayId) -> bool {
        self.days_off.get(day.index()).is_some_and(|off| !off)
    }

    /// Working days in calendar order.
    pub fn working_days(&self) -> impl Iterator<Item = DayId> + '_ {
        self.days_off
            .iter()
            .enumerate()
            .filter(|&(_, off)| !off)
            .map(|(d, _)| DayId(d as u8))
    }

    /// Days off in calendar order.
    pub fn days_off(&self) -> impl Iterator<Item = DayId> + '_ {
        self.days_off
            .iter()
            .enumerate()
            .filter(|&(_, off)| *off)
            .map(|(d, _)| DayId(d as u8))
    }

    /// End of the latest route claimed on `day`, or the anchor start if
    /// nothing was claimed that day.
    pub fn last_claimed_end(&self, day: DayId) -> ClockTime {
        self.last_claimed_end[day.index()]
    }

    /// Number of routes this driver has claimed.
    pub fn claimed_count(&self) -> usize {
        self.claimed
    }

    /// The span the driver blocks on its bus on a working day: from the
    /// anchor start to the cutoff plus `turnaround_mins`.
    pub fn occupancy(&self, turnaround_mins: u32) -> Span {
        Span::new(self.anchor_span.start, self.cutoff + turnaround_mins)
    }

    /// `true` iff `span` overlaps none of the driver's breaks.
    pub fn route_clears_breaks(&self, span: &Span) -> bool {
        self.breaks.iter().all(|b| !b.overlaps(span))
    }

    /// Claim every compatible open route of the week.
    ///
    /// Days are scanned in calendar order.  On each working day the routes
    /// are scanned in time order; every route that can start a chain is
    /// claimed and its forward chain walked, claiming each linked route that
    /// passes the claim rules.  Linked routes that fail (day off, already
    /// driven, inside a break) are skipped but the walk continues past them.
    /// Scanning resumes after a match, so several chains may start on the
    /// same day.
    ///
    /// Returns the number of routes claimed by this call.
    pub fn claim_week(&mut self, timetable: &mut Timetable) -> usize {
        let before = self.claimed;

        for d in 0..self.days_off.len() {
            if self.days_off[d] {
                continue;
            }
            let day = DayId(d as u8);

            for index in 0..timetable.routes(day).len() {
                let start = RouteRef::new(day, index);
                if !self.can_start_chain(timetable, start) {
                    continue;
                }

                let mut cursor = Some(start);
                while let Some(r) = cursor {
                    self.try_claim(timetable, r);
                    cursor = timetable.next_in_chain(r);
                }
            }
        }

        self.claimed - before
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn can_start_chain(&self, timetable: &Timetable, r: RouteRef) -> bool {
        timetable.route(r).start() < self.cutoff && self.can_claim(timetable, r)
    }

    fn can_claim(&self, timetable: &Timetable, r: RouteRef) -> bool {
        let route = timetable.route(r);
        self.works_on(r.day)
            && route.is_open()
            && route.start() >= self.last_claimed_end[r.day.index()]
            && self.route_clears_breaks(&route.span)
            && timetable.slot_free(r.day, self.slot, &route.span)
    }

    fn try_claim(&mut self, timetable: &mut Timetable, r: RouteRef) -> bool {
        if !self.can_claim(timetable, r) {
            return false;
        }
        timetable.set_coverage(r, Coverage::Driven { driver: self.id, slot: self.slot });
        self.last_claimed_end[r.day.index()] = timetable.route(r).end();
        self.claimed += 1;
        trace!(driver = %self.id, route = %r, "claimed route");
        true
    }
}
