//! Plain data row types written by output backends.

use lift_core::Tick;
use lift_model::RunStats;
use lift_sim::TraceRecord;

/// One line of the trace table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRow {
    pub tick:                u64,
    /// `U`, `D` or `N`.
    pub state:               char,
    pub floor:               u32,
    pub doors_transitioning: bool,
    pub active:              bool,
    pub doors_idle_open:     bool,
    pub step:                &'static str,
    pub action:              String,
}

impl From<&TraceRecord> for TraceRow {
    fn from(r: &TraceRecord) -> Self {
        Self {
            tick:                r.tick.0,
            state:               r.direction.symbol(),
            floor:               r.floor as u32,
            doors_transitioning: r.doors_transitioning,
            active:              r.active,
            doors_idle_open:     r.doors_idle_open,
            step:                r.label,
            action:              r.text.clone(),
        }
    }
}

/// Counters for a whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub final_tick:        u64,
    pub events_processed:  u64,
    pub arrivals:          u64,
    pub boarded:           u64,
    pub alighted:          u64,
    pub gave_up:           u64,
    pub almost_gave_up:    u64,
    pub door_reopens:      u64,
    pub door_flutters:     u64,
    pub dormant_entries:   u64,
    /// Mean arrival-to-boarding time; `0.0` if nobody boarded.
    pub average_wait_secs: f64,
}

impl SummaryRow {
    pub fn new(final_tick: Tick, stats: &RunStats) -> Self {
        Self {
            final_tick:        final_tick.0,
            events_processed:  stats.events_processed,
            arrivals:          stats.arrivals,
            boarded:           stats.boarded,
            alighted:          stats.alighted,
            gave_up:           stats.gave_up,
            almost_gave_up:    stats.almost_gave_up,
            door_reopens:      stats.door_reopens,
            door_flutters:     stats.door_flutters,
            dormant_entries:   stats.dormant_entries,
            average_wait_secs: stats.average_wait_secs().unwrap_or(0.0),
        }
    }
}
