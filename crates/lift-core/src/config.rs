//! Simulation configuration.
//!
//! Typically built in code with [`SimConfig::knuth`] or loaded from JSON by
//! the application crate (with the `serde` feature), then validated once by
//! the simulation builder before any event is scheduled.

use crate::{CoreError, CoreResult, Tick, TickRange};

// ── ArrivalConfig ─────────────────────────────────────────────────────────────

/// Ranges for the random rider generator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalConfig {
    /// How long a rider waits in the floor queue before walking away.
    pub patience: TickRange,

    /// Delay between one rider's arrival and the next.
    pub inter_arrival: TickRange,
}

impl ArrivalConfig {
    /// Patience 30 s – 2 min, a new rider every 1 – 90 s.
    pub const fn knuth() -> Self {
        Self {
            patience:      TickRange::new(300, 1_200),
            inter_arrival: TickRange::new(10, 900),
        }
    }

    /// A lightly loaded building: patience 30 s – 6 min, a rider every
    /// 5 s – 20 min.
    pub const fn quiet() -> Self {
        Self {
            patience:      TickRange::new(300, 3_600),
            inter_arrival: TickRange::new(50, 12_000),
        }
    }

    /// Reject empty ranges and zero delays.
    ///
    /// A zero inter-arrival delay would let arrivals pile up at a single
    /// instant forever, so `inter_arrival.min` must be at least one tick.
    pub fn validate(&self) -> CoreResult<()> {
        if self.patience.is_empty() {
            return Err(CoreError::Config(format!(
                "patience range {} is empty",
                self.patience
            )));
        }
        if self.patience.min == 0 {
            return Err(CoreError::Config("patience must be at least 1 tick".into()));
        }
        if self.inter_arrival.is_empty() {
            return Err(CoreError::Config(format!(
                "inter-arrival range {} is empty",
                self.inter_arrival
            )));
        }
        if self.inter_arrival.min == 0 {
            return Err(CoreError::Config(
                "inter-arrival delay must be at least 1 tick".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ArrivalConfig {
    fn default() -> Self {
        Self::knuth()
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// The run stops cleanly when the next agenda entry is due at or after
    /// this tick.
    pub max_tick: Tick,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Number of floors served, numbered `0..floors`.
    pub floors: usize,

    /// The floor the elevator returns to and waits at when idle.
    pub home_floor: usize,

    pub arrivals: ArrivalConfig,
}

impl SimConfig {
    /// The Caltech Mathematics building: five floors, home floor 2, run for
    /// 1000 simulated seconds.
    pub fn knuth(seed: u64) -> Self {
        Self {
            max_tick:   Tick::from_secs(1_000),
            seed,
            floors:     5,
            home_floor: 2,
            arrivals:   ArrivalConfig::knuth(),
        }
    }

    /// Check every constraint the simulator relies on.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floors < 2 {
            return Err(CoreError::Config(format!(
                "need at least 2 floors, got {}",
                self.floors
            )));
        }
        if self.home_floor >= self.floors {
            return Err(CoreError::Config(format!(
                "home floor {} outside 0..{}",
                self.home_floor, self.floors
            )));
        }
        self.arrivals.validate()
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::knuth(42)
    }
}
