//! Rider arrival sources.
//!
//! The simulator never draws random numbers itself.  Each time a rider
//! arrives it asks its [`ArrivalSource`] for the new rider's floors and
//! patience, plus the delay until the next arrival.

use std::collections::VecDeque;

use crate::{ArrivalConfig, CoreError, CoreResult, SimRng};

/// Everything the simulator needs to know about one arriving rider.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalSample {
    /// Floor on which the rider appears.
    pub origin: usize,
    /// Floor the rider wants to reach.  Never equal to `origin`.
    pub destination: usize,
    /// Ticks the rider will stand in the queue before walking away.
    pub patience: u64,
    /// Ticks until the following rider arrives.
    pub inter_arrival: u64,
}

impl ArrivalSample {
    /// Check the sample against a building with `floors` floors.
    pub fn validate(&self, floors: usize) -> CoreResult<()> {
        if self.origin >= floors || self.destination >= floors {
            return Err(CoreError::InvalidArrival(format!(
                "floors {} -> {} outside 0..{floors}",
                self.origin, self.destination
            )));
        }
        if self.origin == self.destination {
            return Err(CoreError::InvalidArrival(format!(
                "origin and destination are both floor {}",
                self.origin
            )));
        }
        Ok(())
    }
}

/// Supplier of arriving riders.
///
/// Returning `None` ends the arrival stream: no further riders are
/// scheduled.
pub trait ArrivalSource {
    fn next_arrival(&mut self, floors: usize) -> Option<ArrivalSample>;
}

// ── RandomArrivals ────────────────────────────────────────────────────────────

/// Uniformly distributed arrivals drawn from a seeded [`SimRng`].
pub struct RandomArrivals {
    rng:    SimRng,
    config: ArrivalConfig,
}

impl RandomArrivals {
    /// Callers are expected to have validated `config` already.
    pub fn new(seed: u64, config: ArrivalConfig) -> Self {
        Self { rng: SimRng::new(seed), config }
    }
}

impl ArrivalSource for RandomArrivals {
    fn next_arrival(&mut self, floors: usize) -> Option<ArrivalSample> {
        let origin = self.rng.gen_range(0..floors);
        // Draw from one fewer floor and skip over the origin so the
        // destination is uniform over the other floors.
        let mut destination = self.rng.gen_range(0..floors - 1);
        if destination >= origin {
            destination += 1;
        }
        let patience = self.rng.gen_range(self.config.patience.min..self.config.patience.max);
        let inter_arrival =
            self.rng.gen_range(self.config.inter_arrival.min..self.config.inter_arrival.max);
        Some(ArrivalSample { origin, destination, patience, inter_arrival })
    }
}

// ── ScriptedArrivals ──────────────────────────────────────────────────────────

/// A fixed list of arrivals, replayed in order.  Used for tests and replays.
#[derive(Default, Debug, Clone)]
pub struct ScriptedArrivals {
    queue: VecDeque<ArrivalSample>,
}

impl ScriptedArrivals {
    pub fn new(samples: impl IntoIterator<Item = ArrivalSample>) -> Self {
        Self { queue: samples.into_iter().collect() }
    }

    /// Append one rider to the end of the script.
    pub fn push(&mut self, sample: ArrivalSample) {
        self.queue.push_back(sample);
    }

    /// Riders not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ArrivalSource for ScriptedArrivals {
    fn next_arrival(&mut self, _floors: usize) -> Option<ArrivalSample> {
        self.queue.pop_front()
    }
}
