//! `tr-timetable`: weekly routes, day-to-day chains, and the generator.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`route`]      | `Route`, `RouteRef`, `Coverage`, `Shortfall`             |
//! | [`timetable`]  | `Timetable` (per-day route lists + forward link table)   |
//! | [`generator`]  | `TimetableGenerator`                                     |
//!
//! # Chain model (summary)
//!
//! Routes on consecutive days with identical start and end are linked into a
//! forward chain.  The link is an index lookup, not an embedded reference:
//!
//! ```text
//! links[day][index] = Some(j)   ⇔   routes[day][index] ≅ routes[day + 1][j]
//! ```
//!
//! A driver that claims a route walks its chain to claim the same time slot
//! on the following days.

pub mod generator;
pub mod route;
pub mod timetable;


pub use generator::TimetableGenerator;
pub use route::{Coverage, Route, RouteRef, Shortfall};
pub use timetable::Timetable;
