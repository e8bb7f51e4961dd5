//! Plain-text backend: the trace table as printed by Knuth's program.
//!
//! ```text
//! TIME    STATE   FLOOR   D1      D2      D3      step    action
//! 0000    N       2       0       0       0       U1      User 0 arrives at floor 2, destination is 4.
//! 0020    N       2       X       X       0       E3      Elevator doors start to open.
//! ```

use std::io::Write;

use crate::writer::TraceWriter;
use crate::{OutputResult, SummaryRow, TraceRow};

/// Writes tab-separated trace lines to any [`Write`] sink (stdout, a file,
/// a `Vec<u8>`).
pub struct TextTraceWriter<W: Write> {
    out:            W,
    header_written: bool,
    finished:       bool,
}

impl<W: Write> TextTraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, header_written: false, finished: false }
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self) -> OutputResult<()> {
        if !self.header_written {
            self.header_written = true;
            writeln!(self.out, "TIME\tSTATE\tFLOOR\tD1\tD2\tD3\tstep\taction")?;
        }
        Ok(())
    }
}

fn flag(on: bool) -> char {
    if on { 'X' } else { '0' }
}

/// Render one table line, without the trailing newline.
pub fn format_row(row: &TraceRow) -> String {
    format!(
        "{:04}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        row.tick,
        row.state,
        row.floor,
        flag(row.doors_transitioning),
        flag(row.active),
        flag(row.doors_idle_open),
        row.step,
        row.action,
    )
}

impl<W: Write> TraceWriter for TextTraceWriter<W> {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        self.header()?;
        for row in rows {
            writeln!(self.out, "{}", format_row(row))?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.header()?;
        writeln!(self.out)?;
        writeln!(self.out, "Simulation stopped at {:04}.", row.final_tick)?;
        writeln!(
            self.out,
            "{} arrived, {} boarded, {} delivered, {} gave up ({} almost did).",
            row.arrivals, row.boarded, row.alighted, row.gave_up, row.almost_gave_up
        )?;
        writeln!(
            self.out,
            "Doors reopened {} times and fluttered {} times; elevator went dormant {} times.",
            row.door_reopens, row.door_flutters, row.dormant_entries
        )?;
        writeln!(self.out, "Average wait before boarding: {:.1} s.", row.average_wait_secs)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
