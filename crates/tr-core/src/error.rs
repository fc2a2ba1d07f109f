//! Workspace error type.
//!
//! Sub-crates define their own error enums and wrap `RosterError` as one
//! variant via `#[from]` (see `tr_search::SearchError`).

use thiserror::Error;

/// The top-level error type for `tr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("invalid fleet size {0:?}: expected a positive integer")]
    InvalidFleetSize(String),

    #[error("{regime} workload ratio {ratio} x fleet size {fleet_size} gives zero target buses")]
    ZeroTargetBuses {
        regime:     &'static str,
        ratio:      f64,
        fleet_size: u32,
    },

    #[error("{regime} sweep interval is zero: {route_duration_mins} min route split across {target} buses")]
    ZeroSweepInterval {
        regime:              &'static str,
        route_duration_mins: u32,
        target:              usize,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `tr-*` crates.
pub type RosterResult<T> = Result<T, RosterError>;
