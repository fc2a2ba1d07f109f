//! Integration tests for tr-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;
    use tr_core::ClockTime;

    use crate::csv::CsvWriter;
    use crate::row::{GenerationRow, RosterRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn roster_row(driver: Option<u32>) -> RosterRow {
        RosterRow {
            day:    "Monday".into(),
            start:  ClockTime::hm(6, 0),
            end:    ClockTime::hm(7, 0),
            driver,
            slot:   driver,
            status: if driver.is_some() { "driven" } else { "no_free_bus" },
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("roster.csv").exists());
        assert!(dir.path().join("search_history.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("roster.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["day", "start", "end", "driver", "slot", "status"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("search_history.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["generation", "best", "mean", "worst"]);
    }

    #[test]
    fn csv_roster_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_roster(&[roster_row(Some(3)), roster_row(None)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("roster.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 2);
        assert_eq!(&read_rows[0][0], "Monday");
        assert_eq!(&read_rows[0][1], "06:00");
        assert_eq!(&read_rows[0][2], "07:00");
        assert_eq!(&read_rows[0][3], "3");
        assert_eq!(&read_rows[0][5], "driven");
        assert_eq!(&read_rows[1][3], ""); // no driver
        assert_eq!(&read_rows[1][5], "no_free_bus");
    }

    #[test]
    fn csv_generation_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_generation(&GenerationRow { generation: 2, best: 0.5, mean: 0.25, worst: 0.0 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("search_history.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "2");
        assert_eq!(&read_rows[0][1], "0.5");
        assert_eq!(&read_rows[0][2], "0.25");
        assert_eq!(&read_rows[0][3], "0");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("missing")).is_err());
    }
}

#[cfg(test)]
mod roster_rows {
    use tr_assign::greedy_roster;
    use tr_core::{ClockTime, RosterConfig};
    use tr_timetable::{Coverage, Shortfall};

    use crate::row::{rows_from_roster, status_label};

    #[test]
    fn one_row_per_route_in_order() {
        let config = RosterConfig::with_fleet_size(4);
        let roster = greedy_roster(&config).unwrap();
        let rows = rows_from_roster(&roster, &config.week);

        assert_eq!(rows.len(), roster.timetable.route_count());
        let first = &rows[0];
        assert_eq!(first.day, "Monday");
        assert_eq!(first.start, ClockTime::hm(6, 0));
        assert_eq!(first.end, ClockTime::hm(7, 0));
        assert_eq!(first.driver, Some(0));
        assert_eq!(first.slot, Some(0));
        assert_eq!(first.status, "driven");
        assert_eq!(rows.last().map(|r| r.day.as_str()), Some("Sunday"));
        assert!(rows.iter().all(|r| r.status != "open"));
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(Coverage::Open), "open");
        assert_eq!(status_label(Coverage::Uncovered(Shortfall::NoShiftChoice)), "no_shift_choice");
        assert_eq!(status_label(Coverage::Uncovered(Shortfall::Unclaimed)), "unclaimed");
    }
}

#[cfg(test)]
mod observer_tests {
    use tr_assign::greedy_roster;
    use tr_core::RosterConfig;
    use tr_search::{OptimizerBuilder, SearchConfig};

    use crate::observer::SearchOutputObserver;
    use crate::row::{GenerationRow, RosterRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult};

    /// In-memory writer that can be told to fail.
    #[derive(Default)]
    struct MemoryWriter {
        roster:   Vec<RosterRow>,
        history:  Vec<GenerationRow>,
        finishes: usize,
        fail:     bool,
    }

    impl OutputWriter for MemoryWriter {
        fn write_roster(&mut self, rows: &[RosterRow]) -> OutputResult<()> {
            self.roster.extend_from_slice(rows);
            Ok(())
        }
        fn write_generation(&mut self, row: &GenerationRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.history.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    fn search(generations: usize) -> SearchConfig {
        SearchConfig { generations, num_threads: Some(1), ..Default::default() }
    }

    #[test]
    fn one_history_row_per_generation() {
        let config = RosterConfig::with_fleet_size(4);
        let mut optimizer = OptimizerBuilder::new(config.clone()).search(search(5)).build().unwrap();
        let mut obs = SearchOutputObserver::new(MemoryWriter::default());
        let outcome = optimizer.run(&mut obs);

        obs.record_roster(&optimizer.guided_roster(&outcome.best), &config.week);
        obs.finish();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.history.len(), 5);
        for (g, (row, stats)) in w.history.iter().zip(&outcome.history).enumerate() {
            assert_eq!(row.generation, g as u64);
            assert_eq!(row.best, stats.best);
        }
        assert_eq!(w.roster.len(), optimizer.baseline.route_count());
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let mut optimizer = OptimizerBuilder::new(RosterConfig::with_fleet_size(4))
            .search(search(3))
            .build()
            .unwrap();
        let mut obs = SearchOutputObserver::new(MemoryWriter { fail: true, ..Default::default() });
        optimizer.run(&mut obs);

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = RosterConfig::with_fleet_size(4);
        let roster = greedy_roster(&config).unwrap();

        let mut obs = SearchOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        obs.record_roster(&roster, &config.week);
        obs.finish();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("roster.csv")).unwrap();
        assert_eq!(rdr.records().count(), roster.timetable.route_count());
    }
}
