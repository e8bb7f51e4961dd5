//! knuth: the Caltech elevator from TAOCP §2.2.5.
//!
//! Runs the five-floor building with Knuth's timings, prints the trace table
//! to stdout and writes `trace.csv` / `run_summary.csv` to `output/knuth`.
//!
//! ```text
//! knuth [config.json]
//! ```
//!
//! Without an argument the built-in configuration is used.  Set `RUST_LOG`
//! (e.g. `RUST_LOG=lift_sim=debug`) for diagnostic logging on stderr.

use std::fs::File;
use std::io::{self, BufReader, Stdout};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use lift_core::{SimConfig, Tick};
use lift_model::RunStats;
use lift_output::{CsvTraceWriter, TextTraceWriter, TraceObserver};
use lift_sim::{SimBuilder, SimObserver, TraceRecord};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64  = 42;
const OUTPUT_DIR: &str = "output/knuth";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Feeds every record to both the terminal table and the CSV files.
struct Tee {
    table: TraceObserver<TextTraceWriter<Stdout>>,
    csv:   TraceObserver<CsvTraceWriter>,
}

impl SimObserver for Tee {
    fn on_action(&mut self, record: &TraceRecord) {
        self.table.on_action(record);
        self.csv.on_action(record);
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &RunStats) {
        self.table.on_sim_end(final_tick, stats);
        self.csv.on_sim_end(final_tick, stats);
    }
}

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    match path {
        None => Ok(SimConfig::knuth(SEED)),
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening {p}"))?;
            let config = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {p}"))?;
            Ok(config)
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // 1. Configuration.
    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;
    println!("=== knuth: rust_lift elevator simulation ===");
    println!(
        "Floors: {}  |  Home: {}  |  Seed: {}  |  Until: {:04}",
        config.floors, config.home_floor, config.seed, config.max_tick.0
    );
    println!(
        "Patience: {}  |  Inter-arrival: {}",
        config.arrivals.patience, config.arrivals.inter_arrival
    );
    println!();

    // 2. Build sim.
    let mut sim = SimBuilder::new(config).build()?;

    // 3. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut obs = Tee {
        table: TraceObserver::new(TextTraceWriter::new(io::stdout())),
        csv:   TraceObserver::new(CsvTraceWriter::new(Path::new(OUTPUT_DIR))?),
    };

    // 4. Run.
    let t0 = Instant::now();
    let result = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    obs.table.flush();
    obs.csv.flush();
    for e in [obs.table.take_error(), obs.csv.take_error()].into_iter().flatten() {
        eprintln!("output error: {e}");
    }
    result?;

    // 5. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {} events, output in {OUTPUT_DIR}/", sim.stats().events_processed);

    Ok(())
}
