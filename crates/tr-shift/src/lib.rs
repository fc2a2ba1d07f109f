//! `tr-shift`: the driver shift model.
//!
//! # Shift kinds
//!
//! | Kind                   | Length | Breaks                              | Days off                       |
//! |------------------------|--------|-------------------------------------|--------------------------------|
//! | `Standard` (type A)    | 9 h    | one, 1 h, starting 4 h in           | the calendar's weekend days    |
//! | `Rotating` (type B)    | 12 h   | 15 min ending every 2 h 15          | all but every 3rd day from anchor |
//!
//! All numbers come from `tr_core::ShiftRules`; the table shows the defaults.
//!
//! # Claiming
//!
//! A [`Driver`] is hired at an anchor route and then walks the week with
//! [`Driver::claim_week`], claiming open routes that fit its cutoff, breaks
//! and bus slot, and following each claimed route's day-to-day chain.

pub mod driver;
pub mod kind;


pub use driver::Driver;
pub use kind::ShiftKind;
