//! `tr-core`: foundational types for the `transit_roster` workspace.
//!
//! This crate is a dependency of every other `tr-*` crate.  It intentionally
//! has no `tr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DayId`, `SlotId`, `DriverId`                         |
//! | [`time`]        | `ClockTime`, `Span`                                   |
//! | [`week`]        | `WeekCalendar`                                        |
//! | [`config`]      | `RosterConfig`, `ShiftRules`, `PeakWindow`, `SweepPlan` |
//! | [`rng`]         | `SearchRng` (seeded, single-owner)                    |
//! | [`error`]       | `RosterError`, `RosterResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `RosterConfig` from JSON.               |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod week;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{PeakWindow, RosterConfig, ShiftRules, SweepPlan, SweepRegime, parse_fleet_size};
pub use error::{RosterError, RosterResult};
pub use ids::{DayId, DriverId, SlotId};
pub use rng::SearchRng;
pub use time::{ClockTime, Span};
pub use week::WeekCalendar;
