//! `TraceObserver<W>`: bridges `SimObserver` to a `TraceWriter`.

use lift_core::Tick;
use lift_model::RunStats;
use lift_sim::{SimObserver, TraceRecord};

use crate::row::{SummaryRow, TraceRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// Trace lines buffered before each write.
pub const DEFAULT_BATCH: usize = 256;

/// A [`SimObserver`] that writes trace lines and the run summary to any
/// [`TraceWriter`] backend (CSV, SQLite, text, …).
///
/// Lines are buffered and written in batches; the buffer is drained when it
/// fills, at the end of the run, and on [`flush`][Self::flush].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    buffer:     Vec<TraceRow>,
    batch:      usize,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self::with_batch(writer, DEFAULT_BATCH)
    }

    /// Create an observer that writes every `batch` lines (at least one).
    pub fn with_batch(writer: W, batch: usize) -> Self {
        let batch = batch.max(1);
        Self {
            writer,
            buffer: Vec::with_capacity(batch),
            batch,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write any buffered lines now.  Useful when the run ended with an
    /// error and `on_sim_end` never fired.
    pub fn flush(&mut self) {
        let result = self.drain();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect output after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn drain(&mut self) -> OutputResult<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let result = self.writer.write_trace(&self.buffer);
        self.buffer.clear();
        result
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

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_action(&mut self, record: &TraceRecord) {
        self.buffer.push(TraceRow::from(record));
        if self.buffer.len() >= self.batch {
            let result = self.drain();
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &RunStats) {
        let result = self.drain();
        self.store_err(result);
        let result = self.writer.write_summary(&SummaryRow::new(final_tick, stats));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
