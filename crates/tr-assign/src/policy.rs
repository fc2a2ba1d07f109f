//! The `ShiftPolicy` trait and its two implementations.

use tr_core::{DayId, WeekCalendar};
use tr_shift::ShiftKind;

/// Decides the shift kind of each newly hired driver.
///
/// Called once per hire, in assignment order.  Returning `None` means the
/// policy has no choice left; the route is flagged as a shortfall and no
/// driver is hired.
pub trait ShiftPolicy {
    fn choose(&mut self, day: DayId, week: &WeekCalendar) -> Option<ShiftKind>;
}

/// Deterministic policy: standard shifts on weekdays, rotating on weekends.
#[derive(Copy, Clone, Debug, Default)]
pub struct WeekdayBias;

impl ShiftPolicy for WeekdayBias {
    fn choose(&mut self, day: DayId, week: &WeekCalendar) -> Option<ShiftKind> {
        Some(if week.is_weekend(day) { ShiftKind::Rotating } else { ShiftKind::Standard })
    }
}

/// Optimizer-guided policy: consumes a bit sequence left to right.
///
/// `false` hires a standard driver, `true` a rotating one.
#[derive(Clone, Debug)]
pub struct ChoiceSequence<'a> {
    choices: &'a [bool],
    next:    usize,
}

impl<'a> ChoiceSequence<'a> {
    pub fn new(choices: &'a [bool]) -> Self {
        Self { choices, next: 0 }
    }

    /// Number of choices handed out so far.
    pub fn consumed(&self) -> usize {
        self.next
    }

    pub fn remaining(&self) -> usize {
        self.choices.len() - self.next
    }
}

impl ShiftPolicy for ChoiceSequence<'_> {
    fn choose(&mut self, _day: DayId, _week: &WeekCalendar) -> Option<ShiftKind> {
        let bit = *self.choices.get(self.next)?;
        self.next += 1;
        Some(ShiftKind::from_choice(bit))
    }
}
