//! `tr-assign`: greedy bus and driver assignment.
//!
//! # Assignment pass
//!
//! ```text
//! for day in week:
//!   for route in day (time order), skipping settled routes:
//!     ① Bus    - first slot whose occupancy and driven routes do not
//!                overlap the route, or flag Uncovered(NoFreeBus).
//!     ② Kind   - ask the ShiftPolicy, or flag Uncovered(NoShiftChoice).
//!     ③ Hire   - Driver anchored at the route on that slot; claim_week.
//!     ④ Hold   - slot occupancy := [anchor start, cutoff + turnaround)
//!                on every working day of the driver.
//!     ⑤ Settle - an anchor the driver could not claim becomes
//!                Uncovered(Unclaimed).
//! ```
//!
//! # Policies
//!
//! | Policy              | Choice                                          |
//! |---------------------|-------------------------------------------------|
//! | [`WeekdayBias`]     | weekday → standard, weekend → rotating          |
//! | [`ChoiceSequence`]  | next caller-supplied bit (optimizer-guided)     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tr_assign::{Assigner, WeekdayBias};
//! use tr_core::RosterConfig;
//! use tr_timetable::TimetableGenerator;
//!
//! let config = RosterConfig::with_fleet_size(4);
//! let timetable = TimetableGenerator::new(&config)?.generate();
//! let roster = Assigner::new(&config).assign(timetable, &mut WeekdayBias);
//! println!("{} drivers", roster.driver_count());
//! ```

pub mod assigner;
pub mod occupancy;
pub mod policy;
pub mod roster;


pub use assigner::{Assigner, greedy_roster};
pub use occupancy::BusOccupancy;
pub use policy::{ChoiceSequence, ShiftPolicy, WeekdayBias};
pub use roster::Roster;
