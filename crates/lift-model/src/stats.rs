//! Counters accumulated over a run.

/// Run-level counters, updated by the step functions as they fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Agenda entries executed (maintained by the run loop).
    pub events_processed: u64,
    pub arrivals:         u64,
    pub boarded:          u64,
    pub alighted:         u64,
    pub gave_up:          u64,
    /// Give-up timers that fired while the rider was about to board.
    pub almost_gave_up:   u64,
    /// Arrivals that caught the doors while they were closing.
    pub door_reopens:     u64,
    pub door_flutters:    u64,
    pub dormant_entries:  u64,
    /// Sum over boarded riders of ticks spent between arrival and boarding.
    pub total_wait_ticks: u64,
}

impl RunStats {
    /// Mean time from arrival to boarding in seconds, or `None` if nobody
    /// boarded.
    pub fn average_wait_secs(&self) -> Option<f64> {
        (self.boarded > 0).then(|| self.total_wait_ticks as f64 / self.boarded as f64 / 10.0)
    }
}
