use std::fmt;

/// The two driver duty patterns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftKind {
    /// Type A: one contiguous 9-hour block with a single break, weekends off.
    Standard,
    /// Type B: a 12-hour block with short periodic breaks, working every
    /// third day.
    Rotating,
}

impl ShiftKind {
    /// Decode one optimizer gene: `false` is type A, `true` is type B.
    #[inline]
    pub fn from_choice(bit: bool) -> Self {
        if bit { ShiftKind::Rotating } else { ShiftKind::Standard }
    }

    /// Single-letter label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            ShiftKind::Standard => "A",
            ShiftKind::Rotating => "B",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
