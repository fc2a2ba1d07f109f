//! Core route types: `Route`, `RouteRef`, `Coverage`, and `Shortfall`.
//!
//! A route is created once by the generator and afterwards only its
//! `coverage` changes.  Coverage is a small state machine:
//!
//! ```text
//! Open ──► Driven { driver, slot }
//!   └────► Uncovered(reason)
//! ```
//!
//! Both end states are final.  An assignment pass never leaves a route
//! `Open`.

use std::fmt;

use tr_core::{ClockTime, DayId, DriverId, SlotId, Span};

// ── Shortfall ─────────────────────────────────────────────────────────────────

/// Why a route ended up without a driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shortfall {
    /// Every bus slot was occupied when the route came up.
    NoFreeBus,
    /// Guided assignment ran out of shift choices before reaching the route.
    NoShiftChoice,
    /// A driver was hired at this route but its shift rules rejected it
    /// (e.g. a standard shift anchored on a weekend day).
    Unclaimed,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Shortfall::NoFreeBus     => "no free bus",
            Shortfall::NoShiftChoice => "no shift choice",
            Shortfall::Unclaimed     => "unclaimed",
        };
        f.write_str(s)
    }
}

// ── Coverage ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coverage {
    /// Not yet processed by an assignment pass.
    #[default]
    Open,
    /// Driven by `driver` on bus `slot`.
    Driven { driver: DriverId, slot: SlotId },
    /// Explicitly flagged coverage shortfall.
    Uncovered(Shortfall),
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// One fixed-duration bus run on one day.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub span:     Span,
    pub day:      DayId,
    pub coverage: Coverage,
}

impl Route {
    pub fn new(day: DayId, start: ClockTime, duration_mins: u32) -> Self {
        Self {
            span:     Span::new(start, start + duration_mins),
            day,
            coverage: Coverage::Open,
        }
    }

    #[inline]
    pub fn start(&self) -> ClockTime {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> ClockTime {
        self.span.end
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.coverage == Coverage::Open
    }

    /// `true` once the route has been processed, whether or not it got a
    /// driver.
    #[inline]
    pub fn is_settled(&self) -> bool {
        !self.is_open()
    }

    /// `true` if a driver and a bus are assigned.
    #[inline]
    pub fn is_driven(&self) -> bool {
        matches!(self.coverage, Coverage::Driven { .. })
    }

    pub fn driver(&self) -> Option<DriverId> {
        match self.coverage {
            Coverage::Driven { driver, .. } => Some(driver),
            _ => None,
        }
    }

    pub fn slot(&self) -> Option<SlotId> {
        match self.coverage {
            Coverage::Driven { slot, .. } => Some(slot),
            _ => None,
        }
    }

    pub fn shortfall(&self) -> Option<Shortfall> {
        match self.coverage {
            Coverage::Uncovered(reason) => Some(reason),
            _ => None,
        }
    }
}

// ── RouteRef ──────────────────────────────────────────────────────────────────

/// Address of a route inside a [`Timetable`](crate::Timetable): the day and
/// the route's position in that day's time-ordered list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRef {
    pub day:   DayId,
    pub index: usize,
}

impl RouteRef {
    #[inline]
    pub fn new(day: DayId, index: usize) -> Self {
        Self { day, index }
    }
}

impl fmt::Display for RouteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.day, self.index)
    }
}
