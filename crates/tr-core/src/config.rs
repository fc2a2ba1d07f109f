//! Roster configuration.
//!
//! One immutable `RosterConfig` is threaded through the generator, the shift
//! model and the assigner.  Nothing in the workspace reads ambient globals.
//!
//! `RosterConfig::default()` is the reference network: routes of 60 minutes,
//! service from 06:00 to 03:00 the next morning, morning and evening peaks,
//! and a Monday–Sunday week with a two-day weekend.

use crate::{ClockTime, DayId, RosterError, RosterResult, WeekCalendar};

// ── PeakWindow ────────────────────────────────────────────────────────────────

/// A clock range `[start, end)` during which more buses run on weekdays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakWindow {
    pub start: ClockTime,
    pub end:   ClockTime,
}

impl PeakWindow {
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, t: ClockTime) -> bool {
        self.start <= t && t < self.end
    }
}

// ── ShiftRules ────────────────────────────────────────────────────────────────

/// Duty-pattern constants for the two shift kinds, in minutes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftRules {
    /// Standard shift length from the anchor start.  Default: 9 h.
    pub standard_length_mins:       u32,
    /// Offset of the single standard-shift break.  Default: 4 h.
    pub standard_break_offset_mins: u32,
    /// Length of the single standard-shift break.  Default: 1 h.
    pub standard_break_mins:        u32,
    /// Rotating shift length from the anchor start.  Default: 12 h.
    pub rotating_length_mins:       u32,
    /// Spacing of the rotating-shift break recurrence points.  Default: 2 h 15.
    pub rotating_break_every_mins:  u32,
    /// Each rotating break ends at a recurrence point.  Default: 15 min.
    pub rotating_break_mins:        u32,
    /// A rotating driver works every n-th day from the anchor day.  Default: 3.
    pub rotating_day_stride:        usize,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            standard_length_mins:       9 * 60,
            standard_break_offset_mins: 4 * 60,
            standard_break_mins:        60,
            rotating_length_mins:       12 * 60,
            rotating_break_every_mins:  2 * 60 + 15,
            rotating_break_mins:        15,
            rotating_day_stride:        3,
        }
    }
}

impl ShiftRules {
    fn validate(&self) -> RosterResult<()> {
        if self.rotating_break_every_mins == 0 {
            return Err(RosterError::Config("rotating break spacing must be > 0".into()));
        }
        if self.rotating_break_mins > self.rotating_break_every_mins {
            return Err(RosterError::Config(format!(
                "rotating break of {} min is longer than its {} min spacing",
                self.rotating_break_mins, self.rotating_break_every_mins
            )));
        }
        if self.rotating_day_stride == 0 {
            return Err(RosterError::Config("rotating day stride must be > 0".into()));
        }
        if self.standard_length_mins == 0 || self.rotating_length_mins == 0 {
            return Err(RosterError::Config("shift lengths must be > 0".into()));
        }
        Ok(())
    }
}

// ── SweepPlan ─────────────────────────────────────────────────────────────────

/// Target simultaneous bus count and cursor step for one demand regime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SweepRegime {
    pub target:        usize,
    pub interval_mins: u32,
}

/// The peak and off-peak regimes derived from a validated config.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SweepPlan {
    pub peak:     SweepRegime,
    pub off_peak: SweepRegime,
}

// ── RosterConfig ──────────────────────────────────────────────────────────────

/// Top-level roster configuration.
///
/// Typically built from `Default` with the fleet size overridden, or loaded
/// from JSON by the application crate (requires the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RosterConfig {
    /// Number of buses available on any one day.
    pub fleet_size: u32,

    /// Fixed duration of every generated route.  Default: 60.
    pub route_duration_mins: u32,

    /// First moment a route may start.  Default: 06:00.
    pub open: ClockTime,

    /// Every route must end at or before this.  Default: 27:00 (03:00 next day).
    pub close: ClockTime,

    /// Weekday windows with the peak regime.  Default: 07–09 and 17–19.
    pub peak_windows: Vec<PeakWindow>,

    /// Fraction of the fleet on the road during peaks.  Default: 0.7.
    pub peak_workload: f64,

    /// Fraction of the fleet on the road outside peaks.  Default: 0.5.
    pub off_peak_workload: f64,

    pub week: WeekCalendar,

    /// Buffer added after a driver's cutoff before the bus is free again.
    /// Also offsets the initial sentinel occupancy before `open`.  Default: 15.
    pub turnaround_mins: u32,

    pub shift_rules: ShiftRules,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            fleet_size:          8,
            route_duration_mins: 60,
            open:                ClockTime::hm(6, 0),
            close:               ClockTime::hm(27, 0),
            peak_windows:        vec![
                PeakWindow::new(ClockTime::hm(7, 0), ClockTime::hm(9, 0)),
                PeakWindow::new(ClockTime::hm(17, 0), ClockTime::hm(19, 0)),
            ],
            peak_workload:       0.7,
            off_peak_workload:   0.5,
            week:                WeekCalendar::default(),
            turnaround_mins:     15,
            shift_rules:         ShiftRules::default(),
        }
    }
}

impl RosterConfig {
    /// Default configuration with `fleet_size` buses.
    pub fn with_fleet_size(fleet_size: u32) -> Self {
        Self { fleet_size, ..Self::default() }
    }

    /// `true` if `t` on `day` falls under the peak regime.
    ///
    /// Weekend days never run the peak regime.
    pub fn is_peak(&self, day: DayId, t: ClockTime) -> bool {
        !self.week.is_weekend(day) && self.peak_windows.iter().any(|w| w.contains(t))
    }

    /// Check the configuration and derive the generator's sweep regimes.
    ///
    /// Target bus counts are `floor(ratio * fleet_size)`.  A target of zero
    /// (or a step of zero minutes) is rejected here so the generator never
    /// divides by zero or stalls its cursor.
    pub fn validate(&self) -> RosterResult<SweepPlan> {
        if self.fleet_size == 0 {
            return Err(RosterError::InvalidFleetSize(self.fleet_size.to_string()));
        }
        if self.route_duration_mins == 0 {
            return Err(RosterError::Config("route duration must be > 0".into()));
        }
        if self.close <= self.open {
            return Err(RosterError::Config(format!(
                "closing time {} is not after opening time {}",
                self.close, self.open
            )));
        }
        for w in &self.peak_windows {
            if w.end <= w.start {
                return Err(RosterError::Config(format!(
                    "peak window {}..{} is empty",
                    w.start, w.end
                )));
            }
        }
        self.week.validate()?;
        self.shift_rules.validate()?;

        Ok(SweepPlan {
            peak:     self.regime("peak", self.peak_workload)?,
            off_peak: self.regime("off-peak", self.off_peak_workload)?,
        })
    }

    fn regime(&self, regime: &'static str, ratio: f64) -> RosterResult<SweepRegime> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(RosterError::Config(format!(
                "{regime} workload ratio {ratio} is outside (0, 1]"
            )));
        }
        let target = (ratio * self.fleet_size as f64).floor() as usize;
        if target == 0 {
            return Err(RosterError::ZeroTargetBuses {
                regime,
                ratio,
                fleet_size: self.fleet_size,
            });
        }
        let interval_mins = self.route_duration_mins / target as u32;
        if interval_mins == 0 {
            return Err(RosterError::ZeroSweepInterval {
                regime,
                route_duration_mins: self.route_duration_mins,
                target,
            });
        }
        Ok(SweepRegime { target, interval_mins })
    }
}

/// Parse a user-supplied fleet size.
///
/// Surrounding whitespace is ignored; anything else that is not a positive
/// integer is an [`RosterError::InvalidFleetSize`].
pub fn parse_fleet_size(input: &str) -> RosterResult<u32> {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RosterError::InvalidFleetSize(input.trim().to_string())),
    }
}
