//! Fluent builder for constructing a [`Sim`].

use lift_agenda::{Agenda, HandleSlot};
use lift_core::{ArrivalSource, RandomArrivals, SimConfig};
use lift_model::Building;

use crate::sim::Handles;
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Inputs
///
/// | Method            | Default                                         |
/// |-------------------|-------------------------------------------------|
/// | `new(config)`     | required                                        |
/// | `.arrivals(src)`  | `RandomArrivals` seeded from `config.seed`      |
///
/// # Example
///
/// ```rust,ignore
/// let script = ScriptedArrivals::new([ArrivalSample { origin: 2, destination: 4, .. }]);
/// let mut sim = SimBuilder::new(config).arrivals(script).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: ArrivalSource> {
    config:   SimConfig,
    arrivals: S,
}

impl SimBuilder<RandomArrivals> {
    /// Start from `config`, drawing riders at random.
    pub fn new(config: SimConfig) -> Self {
        let arrivals = RandomArrivals::new(config.seed, config.arrivals.clone());
        Self { config, arrivals }
    }
}

impl<S: ArrivalSource> SimBuilder<S> {
    /// Replace the arrival source.
    pub fn arrivals<T: ArrivalSource>(self, arrivals: T) -> SimBuilder<T> {
        SimBuilder { config: self.config, arrivals }
    }

    /// Validate the configuration and return a ready-to-run [`Sim`] with a
    /// dormant car at the home floor and an empty agenda.
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;

        Ok(Sim {
            building: Building::from_config(&self.config),
            agenda:   Agenda::new(),
            handles:  Handles {
                primary:  HandleSlot::EMPTY,
                doors:    HandleSlot::EMPTY,
                watchdog: HandleSlot::EMPTY,
                give_up:  Vec::new(),
            },
            arrivals: self.arrivals,
            config:   self.config,
            started:  false,
            finished: false,
        })
    }
}
