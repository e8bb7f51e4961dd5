//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `trace` and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::TraceWriter;
use crate::{OutputResult, SummaryRow, TraceRow};

/// Writes the trace and run summary to an SQLite database.
pub struct SqliteTraceWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteTraceWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trace (
                 seq    INTEGER PRIMARY KEY AUTOINCREMENT,
                 tick   INTEGER NOT NULL,
                 state  TEXT    NOT NULL,
                 floor  INTEGER NOT NULL,
                 d1     INTEGER NOT NULL,
                 d2     INTEGER NOT NULL,
                 d3     INTEGER NOT NULL,
                 step   TEXT    NOT NULL,
                 action TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 final_tick        INTEGER NOT NULL,
                 events_processed  INTEGER NOT NULL,
                 arrivals          INTEGER NOT NULL,
                 boarded           INTEGER NOT NULL,
                 alighted          INTEGER NOT NULL,
                 gave_up           INTEGER NOT NULL,
                 almost_gave_up    INTEGER NOT NULL,
                 door_reopens      INTEGER NOT NULL,
                 door_flutters     INTEGER NOT NULL,
                 dormant_entries   INTEGER NOT NULL,
                 average_wait_secs REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl TraceWriter for SqliteTraceWriter {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trace (tick, state, floor, d1, d2, d3, step, action) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.state.to_string(),
                    row.floor,
                    row.doors_transitioning as i64,
                    row.active as i64,
                    row.doors_idle_open as i64,
                    row.step,
                    row.action,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary \
             (final_tick, events_processed, arrivals, boarded, alighted, gave_up, \
              almost_gave_up, door_reopens, door_flutters, dormant_entries, average_wait_secs) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                row.final_tick as i64,
                row.events_processed as i64,
                row.arrivals as i64,
                row.boarded as i64,
                row.alighted as i64,
                row.gave_up as i64,
                row.almost_gave_up as i64,
                row.door_reopens as i64,
                row.door_flutters as i64,
                row.dormant_entries as i64,
                row.average_wait_secs,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
