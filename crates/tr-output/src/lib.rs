//! `tr-output`: roster and search-history report writers.
//!
//! | Backend | Files created                             |
//! |---------|-------------------------------------------|
//! | CSV     | `roster.csv`, `search_history.csv`        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SearchOutputObserver`], which implements `tr_search::SearchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tr_output::{CsvWriter, SearchOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SearchOutputObserver::new(writer);
//! let outcome = optimizer.run(&mut obs);
//! obs.record_roster(&optimizer.guided_roster(&outcome.best), &config.week);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SearchOutputObserver;
pub use row::{GenerationRow, RosterRow, rows_from_roster, status_label};
pub use writer::OutputWriter;
