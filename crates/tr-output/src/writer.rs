//! The `OutputWriter` trait implemented by all backend writers.

use crate::{GenerationRow, OutputResult, RosterRow};

/// Trait implemented by report writers.
///
/// Errors raised while driven by [`SearchOutputObserver`][crate::SearchOutputObserver]
/// are stored there and retrieved with `take_error`.
pub trait OutputWriter {
    /// Write a batch of roster rows.
    fn write_roster(&mut self, rows: &[RosterRow]) -> OutputResult<()>;

    /// Write one search-history row.
    fn write_generation(&mut self, row: &GenerationRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent - safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
