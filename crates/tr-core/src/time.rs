//! Service-day time model.
//!
//! # Design
//!
//! Time is a `ClockTime`: whole minutes since midnight of the service day.
//! A service day may roll past midnight, so 03:00 the following morning is
//! `ClockTime(27 * 60)` and sorts after 23:59 of the same service day.
//!
//! Every day of the week uses the same service-day clock.  A 07:00 route on
//! Monday and a 07:00 route on Tuesday therefore carry identical `ClockTime`
//! values, which is what the day-to-day route links compare.
//!
//! Integer minutes keep all shift arithmetic exact (no floating-point drift)
//! and make comparisons O(1).

use std::fmt;

// ── ClockTime ────────────────────────────────────────────────────────────────

/// Minutes since midnight of the service day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime(pub u32);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// `hours:minutes` on the service day.  `hours` may exceed 23 for times
    /// after midnight (e.g. `hm(27, 0)` is 03:00 the next morning).
    #[inline]
    pub const fn hm(hours: u32, minutes: u32) -> ClockTime {
        ClockTime(hours * 60 + minutes)
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// `self` moved `mins` earlier, clamped at midnight.
    #[inline]
    pub fn saturating_sub(self, mins: u32) -> ClockTime {
        ClockTime(self.0.saturating_sub(mins))
    }
}

impl std::ops::Add<u32> for ClockTime {
    type Output = ClockTime;
    #[inline]
    fn add(self, rhs: u32) -> ClockTime {
        ClockTime(self.0 + rhs)
    }
}

impl std::ops::Sub<u32> for ClockTime {
    type Output = ClockTime;
    #[inline]
    fn sub(self, rhs: u32) -> ClockTime {
        ClockTime(self.0 - rhs)
    }
}

impl std::ops::Sub for ClockTime {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: ClockTime) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for ClockTime {
    /// Wall-clock `HH:MM`; times past midnight wrap (27:00 prints as 03:00).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", (self.0 / 60) % 24, self.0 % 60)
    }
}

// ── Span ──────────────────────────────────────────────────────────────────────

/// Half-open interval `[start, end)` on the service-day clock.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: ClockTime,
    pub end:   ClockTime,
}

impl Span {
    #[inline]
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        debug_assert!(start <= end, "span end {end} precedes start {start}");
        Self { start, end }
    }

    /// A zero-length span at `at`.  Overlaps nothing.
    #[inline]
    pub fn instant(at: ClockTime) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub fn duration_mins(&self) -> u32 {
        self.end - self.start
    }

    /// `true` unless one span ends at or before the other starts.
    ///
    /// Touching spans (`a.end == b.start`) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
