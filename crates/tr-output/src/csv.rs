//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `roster.csv`
//! - `search_history.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{GenerationRow, OutputResult, RosterRow};
use crate::writer::OutputWriter;

/// Writes the roster and the search history to two CSV files.
pub struct CsvWriter {
    roster:   Writer<File>,
    history:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut roster = Writer::from_path(dir.join("roster.csv"))?;
        roster.write_record(["day", "start", "end", "driver", "slot", "status"])?;

        let mut history = Writer::from_path(dir.join("search_history.csv"))?;
        history.write_record(["generation", "best", "mean", "worst"])?;

        Ok(Self {
            roster,
            history,
            finished: false,
        })
    }
}

fn optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_roster(&mut self, rows: &[RosterRow]) -> OutputResult<()> {
        for row in rows {
            self.roster.write_record(&[
                row.day.clone(),
                row.start.to_string(),
                row.end.to_string(),
                optional(row.driver),
                optional(row.slot),
                row.status.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_generation(&mut self, row: &GenerationRow) -> OutputResult<()> {
        self.history.write_record(&[
            row.generation.to_string(),
            row.best.to_string(),
            row.mean.to_string(),
            row.worst.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.roster.flush()?;
        self.history.flush()?;
        Ok(())
    }
}
