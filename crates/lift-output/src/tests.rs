//! Integration tests for lift-output.

#[cfg(test)]
mod fixtures {
    use lift_core::{ArrivalConfig, ArrivalSample, ScriptedArrivals, SimConfig, Tick};
    use lift_sim::{Sim, SimBuilder};

    use crate::row::{SummaryRow, TraceRow};

    pub fn trace_row(tick: u64, step: &'static str, action: &str) -> TraceRow {
        TraceRow {
            tick,
            state:               'U',
            floor:               3,
            doors_transitioning: true,
            active:              true,
            doors_idle_open:     false,
            step,
            action:              action.to_owned(),
        }
    }

    pub fn summary_row() -> SummaryRow {
        SummaryRow {
            final_tick:        10_000,
            events_processed:  120,
            arrivals:          9,
            boarded:           7,
            alighted:          6,
            gave_up:           2,
            almost_gave_up:    1,
            door_reopens:      1,
            door_flutters:     3,
            dormant_entries:   2,
            average_wait_secs: 41.5,
        }
    }

    /// One rider from the home floor to floor 4; 27 trace lines.
    pub fn single_rider_sim() -> Sim<ScriptedArrivals> {
        let config = SimConfig {
            max_tick:   Tick(5_000),
            seed:       1,
            floors:     5,
            home_floor: 2,
            arrivals:   ArrivalConfig::knuth(),
        };
        let script = ScriptedArrivals::new([ArrivalSample {
            origin:        2,
            destination:   4,
            patience:      1_000,
            inter_arrival: 10_000,
        }]);
        SimBuilder::new(config).arrivals(script).build().unwrap()
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::fixtures::{single_rider_sim, summary_row, trace_row};
    use crate::csv::CsvTraceWriter;
    use crate::observer::TraceObserver;
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trace.csv").exists());
        assert!(dir.path().join("run_summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trace.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "state", "floor", "d1", "d2", "d3", "step", "action"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        assert_eq!(rdr.headers().unwrap().len(), 11);
    }

    #[test]
    fn csv_trace_rows_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_trace(&[
            trace_row(100, "E7", "Elevator moving up to floor 3."),
            trace_row(151, "E7", "Elevator moving up to floor 4."),
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trace.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "100");
        assert_eq!(&rows[0][1], "U");
        assert_eq!(&rows[0][3], "1"); // d1
        assert_eq!(&rows[0][5], "0"); // d3
        assert_eq!(&rows[1][7], "Elevator moving up to floor 4.");
    }

    #[test]
    fn csv_summary_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "10000");
        assert_eq!(&rows[0][2], "9"); // arrivals
        assert_eq!(&rows[0][10], "41.5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        let mut sim = single_rider_sim();
        let dir = tmp();
        let writer = CsvTraceWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::with_batch(writer, 10);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("trace.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 27);
        assert_eq!(&rows[0][6], "U1");
        assert_eq!(&rows[26][6], "E9");

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let summary: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&summary[0][0], "10000");
        assert_eq!(&summary[0][4], "1"); // alighted
    }
}

// ── Text tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use super::fixtures::{single_rider_sim, summary_row, trace_row};
    use crate::observer::TraceObserver;
    use crate::text::{TextTraceWriter, format_row};
    use crate::writer::TraceWriter;

    #[test]
    fn row_format_matches_table() {
        let line = format_row(&trace_row(7, "E4", "Doors are open. Nobody outside elevator."));
        assert_eq!(line, "0007\tU\t3\tX\tX\t0\tE4\tDoors are open. Nobody outside elevator.");
    }

    #[test]
    fn header_written_once() {
        let mut w = TextTraceWriter::new(Vec::new());
        w.write_trace(&[trace_row(1, "E3", "a")]).unwrap();
        w.write_trace(&[trace_row(2, "E4", "b")]).unwrap();
        w.finish().unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(out.matches("TIME\tSTATE").count(), 1);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn summary_appended() {
        let mut w = TextTraceWriter::new(Vec::new());
        w.write_summary(&summary_row()).unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert!(out.contains("Simulation stopped at 10000."));
        assert!(out.contains("9 arrived, 7 boarded, 6 delivered, 2 gave up (1 almost did)."));
    }

    #[test]
    fn integration_text() {
        let mut sim = single_rider_sim();
        let mut obs = TraceObserver::new(TextTraceWriter::new(Vec::new()));
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let out = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "TIME\tSTATE\tFLOOR\tD1\tD2\tD3\tstep\taction");
        assert_eq!(lines[1], "0000\tN\t2\t0\t0\t0\tU1\tUser 0 arrives at floor 2, destination is 4.");
        assert_eq!(lines[2], "0000\tN\t2\t0\t0\t0\tU2\tUser 0 presses up button.");
        assert_eq!(lines[4], "0020\tN\t2\tX\tX\t0\tE3\tElevator doors start to open.");
        assert!(out.contains("1 arrived, 1 boarded, 1 delivered, 0 gave up (0 almost did)."));
    }
}

// ── Observer tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;

    use super::fixtures::single_rider_sim;
    use crate::observer::TraceObserver;
    use crate::row::{SummaryRow, TraceRow};
    use crate::writer::TraceWriter;
    use crate::{OutputError, OutputResult};

    /// Counts calls; fails every trace write after the first.
    #[derive(Default)]
    struct Flaky {
        batches:   Vec<usize>,
        summaries: usize,
        finishes:  usize,
    }

    impl TraceWriter for Flaky {
        fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
            self.batches.push(rows.len());
            if self.batches.len() > 1 {
                return Err(OutputError::Io(io::Error::other(format!(
                    "batch {} rejected",
                    self.batches.len()
                ))));
            }
            Ok(())
        }

        fn write_summary(&mut self, _row: &SummaryRow) -> OutputResult<()> {
            self.summaries += 1;
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn batches_and_keeps_first_error() {
        let mut sim = single_rider_sim();
        let mut obs = TraceObserver::with_batch(Flaky::default(), 10);
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("second batch fails");
        assert!(err.to_string().contains("batch 2 rejected"));
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.batches, [10, 10, 7]);
        assert_eq!(w.summaries, 1);
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn explicit_flush_writes_partial_batch() {
        let mut sim = single_rider_sim();
        let mut obs = TraceObserver::new(Flaky::default());
        for _ in 0..3 {
            sim.step(&mut obs).unwrap();
        }
        obs.flush();
        obs.flush();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().batches, [3]);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::fixtures::{single_rider_sim, summary_row, trace_row};
    use crate::observer::TraceObserver;
    use crate::sqlite::SqliteTraceWriter;
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn count(dir: &TempDir, table: &str) -> i64 {
        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_rows_written() {
        let dir = tmp();
        let mut w = SqliteTraceWriter::new(dir.path()).unwrap();
        w.write_trace(&[trace_row(1, "E3", "a"), trace_row(2, "E4", "b")]).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert_eq!(count(&dir, "trace"), 2);
        assert_eq!(count(&dir, "run_summary"), 1);

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let step: String = conn
            .query_row("SELECT step FROM trace ORDER BY seq DESC LIMIT 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(step, "E4");
    }

    #[test]
    fn integration_sqlite() {
        let mut sim = single_rider_sim();
        let dir = tmp();
        let mut obs = TraceObserver::new(SqliteTraceWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);
        assert_eq!(count(&dir, "trace"), 27);
    }
}
