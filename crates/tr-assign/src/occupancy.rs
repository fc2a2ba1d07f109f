//! Per-day, per-slot bus occupancy.

use tr_core::{ClockTime, DayId, RosterConfig, SlotId, Span};

/// The span each bus slot is held for, per day.
///
/// Every slot starts with a zero-length sentinel span `turnaround` minutes
/// before opening, so the first route of a day always finds a free bus.
/// Days past `day_count` have no slots: nothing is free there and holds on
/// them are ignored.
pub struct BusOccupancy {
    /// `spans[day][slot]`.
    spans: Vec<Vec<Span>>,
}

impl BusOccupancy {
    /// Occupancy for `day_count` days of `config.fleet_size` slots each.
    pub fn new(config: &RosterConfig, day_count: usize) -> Self {
        let sentinel = Span::instant(Self::sentinel_time(config));
        Self {
            spans: vec![vec![sentinel; config.fleet_size as usize]; day_count],
        }
    }

    fn sentinel_time(config: &RosterConfig) -> ClockTime {
        config.open.saturating_sub(config.turnaround_mins)
    }

    pub fn slot_count(&self) -> usize {
        self.spans.first().map(Vec::len).unwrap_or(0)
    }

    /// The span slot `slot` is currently held for on `day`.
    pub fn span(&self, day: DayId, slot: SlotId) -> Span {
        self.spans[day.index()][slot.index()]
    }

    /// First slot, in index order, whose held span does not overlap `span`.
    pub fn free_slot(&self, day: DayId, span: &Span) -> Option<SlotId> {
        self.free_slot_where(day, span, |_| true)
    }

    /// First slot, in index order, whose held span does not overlap `span`
    /// and for which `usable` returns `true`.
    pub fn free_slot_where(
        &self,
        day:    DayId,
        span:   &Span,
        usable: impl Fn(SlotId) -> bool,
    ) -> Option<SlotId> {
        self.spans
            .get(day.index())?
            .iter()
            .enumerate()
            .filter(|(_, held)| !held.overlaps(span))
            .map(|(i, _)| SlotId(i as u32))
            .find(|&slot| usable(slot))
    }

    /// Replace the span slot `slot` is held for on `day`.
    pub fn hold(&mut self, day: DayId, slot: SlotId, span: Span) {
        if let Some(held) = self.spans.get_mut(day.index()).and_then(|d| d.get_mut(slot.index())) {
            *held = span;
        }
    }
}
