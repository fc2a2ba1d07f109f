//! The ordered week the timetable is built for.

use crate::{DayId, RosterError, RosterResult};

/// Ordered day names.  The last `weekend_days` entries are weekend days:
/// no peak regime applies on them and the default shift policy staffs them
/// with rotating shifts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekCalendar {
    pub days:         Vec<String>,
    pub weekend_days: usize,
}

impl Default for WeekCalendar {
    fn default() -> Self {
        let days = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
        Self {
            days:         days.iter().map(|d| d.to_string()).collect(),
            weekend_days: 2,
        }
    }
}

impl WeekCalendar {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All days in calendar order.
    pub fn day_ids(&self) -> impl Iterator<Item = DayId> + use<> {
        (0..self.days.len() as u8).map(DayId)
    }

    /// Display name of `day`, or `"?"` for an out-of-range id.
    pub fn name(&self, day: DayId) -> &str {
        self.days.get(day.index()).map(String::as_str).unwrap_or("?")
    }

    #[inline]
    pub fn is_weekend(&self, day: DayId) -> bool {
        day.index() >= self.days.len().saturating_sub(self.weekend_days)
    }

    /// The following calendar day, or `None` for the last day of the week.
    /// The week does not wrap.
    #[inline]
    pub fn next(&self, day: DayId) -> Option<DayId> {
        let next = day.index() + 1;
        (next < self.days.len()).then(|| DayId(next as u8))
    }

    pub(crate) fn validate(&self) -> RosterResult<()> {
        if self.days.is_empty() {
            return Err(RosterError::Config("week calendar has no days".into()));
        }
        if self.days.len() > u8::MAX as usize {
            return Err(RosterError::Config(format!(
                "week calendar has {} days; at most {} are supported",
                self.days.len(),
                u8::MAX
            )));
        }
        if self.weekend_days > self.days.len() {
            return Err(RosterError::Config(format!(
                "{} weekend days requested but the week only has {}",
                self.weekend_days,
                self.days.len()
            )));
        }
        Ok(())
    }
}
