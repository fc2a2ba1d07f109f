//! `SearchOutputObserver<W>`: bridges `SearchObserver` to an `OutputWriter`.

use tr_assign::Roster;
use tr_core::WeekCalendar;
use tr_search::{GenerationStats, SearchObserver};

use crate::row::{GenerationRow, rows_from_roster};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SearchObserver`] that writes one history row per generation to any
/// [`OutputWriter`] backend, and the final roster on request.
///
/// Errors from the writer are stored internally because `SearchObserver`
/// methods have no return value.  After `optimizer.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SearchOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SearchOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Write every route of `roster`.
    pub fn record_roster(&mut self, roster: &Roster, week: &WeekCalendar) {
        let rows = rows_from_roster(roster, week);
        let result = self.writer.write_roster(&rows);
        self.store_err(result);
    }

    /// Flush the writer.  Idempotent.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the search).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SearchObserver for SearchOutputObserver<W> {
    fn on_generation_end(&mut self, stats: &GenerationStats) {
        let result = self.writer.write_generation(&GenerationRow::from(stats));
        self.store_err(result);
    }
}
