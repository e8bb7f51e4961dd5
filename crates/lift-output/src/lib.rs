//! `lift-output`: trace and summary writers for the rust_lift simulator.
//!
//! Three backends are provided:
//!
//! | Feature   | Backend     | Output                                       |
//! |-----------|-------------|----------------------------------------------|
//! | *(none)*  | CSV         | `trace.csv`, `run_summary.csv`               |
//! | *(none)*  | Text        | Knuth's trace table on any `io::Write`       |
//! | `sqlite`  | SQLite      | `output.db`                                  |
//!
//! All backends implement [`TraceWriter`] and are driven by
//! [`TraceObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output")).unwrap();
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{SummaryRow, TraceRow};
pub use text::TextTraceWriter;
pub use writer::TraceWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTraceWriter;
