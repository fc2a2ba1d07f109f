//! Typed indices for days, bus slots and drivers.
//!
//! Each id is a plain index into a per-week, per-fleet or per-roster `Vec`.
//! The inner integer is `pub`; prefer `.index()` when indexing.

use std::fmt;

/// Generate an index newtype that displays as `"<label> <n>"`.
macro_rules! roster_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

roster_id! {
    /// Position of a day in the `WeekCalendar` (0 = first day of the week).
    pub struct DayId(u8) => "day";
}

roster_id! {
    /// A bus slot, `0..fleet_size`.  One physical bus per slot per day.
    pub struct SlotId(u32) => "bus";
}

roster_id! {
    /// Index of a driver in the roster's driver registry.
    pub struct DriverId(u32) => "driver";
}
