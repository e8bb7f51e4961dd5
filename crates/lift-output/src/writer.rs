//! The `TraceWriter` trait implemented by all backend writers.

use crate::{OutputResult, SummaryRow, TraceRow};

/// Trait implemented by the CSV, SQLite and text writers.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and retrieved
/// with [`take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Write a batch of trace lines, in order.
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Write the end-of-run summary.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
