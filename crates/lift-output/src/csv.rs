//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trace.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, SummaryRow, TraceRow};

/// Writes the trace and run summary to two CSV files.
pub struct CsvTraceWriter {
    trace:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record(["tick", "state", "floor", "d1", "d2", "d3", "step", "action"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record([
            "final_tick",
            "events_processed",
            "arrivals",
            "boarded",
            "alighted",
            "gave_up",
            "almost_gave_up",
            "door_reopens",
            "door_flutters",
            "dormant_entries",
            "average_wait_secs",
        ])?;

        Ok(Self { trace, summary, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.trace.write_record(&[
                row.tick.to_string(),
                row.state.to_string(),
                row.floor.to_string(),
                (row.doors_transitioning as u8).to_string(),
                (row.active as u8).to_string(),
                (row.doors_idle_open as u8).to_string(),
                row.step.to_owned(),
                row.action.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.final_tick.to_string(),
            row.events_processed.to_string(),
            row.arrivals.to_string(),
            row.boarded.to_string(),
            row.alighted.to_string(),
            row.gave_up.to_string(),
            row.almost_gave_up.to_string(),
            row.door_reopens.to_string(),
            row.door_flutters.to_string(),
            row.dormant_entries.to_string(),
            format!("{:.1}", row.average_wait_secs),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
