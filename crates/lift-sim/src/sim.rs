//! The `Sim` struct and its event loop.

use lift_agenda::{Agenda, HandleSlot};
use lift_core::{ArrivalSource, SimConfig, Tick};
use lift_model::{Action, Building, Effect, Outcome, RunStats, Slot};
use tracing::{debug, error, info, trace};

use crate::{SimError, SimObserver, SimResult, TraceRecord};

// ── Handles ───────────────────────────────────────────────────────────────────

/// One [`HandleSlot`] per independent thread of activity.
pub(crate) struct Handles {
    pub(crate) primary:  HandleSlot,
    pub(crate) doors:    HandleSlot,
    pub(crate) watchdog: HandleSlot,
    /// Indexed by `RiderId`; grown on first use and never shrunk.  Slots of
    /// riders who left stay empty.
    pub(crate) give_up:  Vec<HandleSlot>,
}

impl Handles {
    fn get_mut(&mut self, slot: Slot) -> &mut HandleSlot {
        match slot {
            Slot::Primary => &mut self.primary,
            Slot::Doors => &mut self.doors,
            Slot::Watchdog => &mut self.watchdog,
            Slot::GiveUp(rider) => {
                let i = rider.index();
                if self.give_up.len() <= i {
                    self.give_up.resize(i + 1, HandleSlot::EMPTY);
                }
                &mut self.give_up[i]
            }
        }
    }
}

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// Result of a single [`Sim::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One agenda entry ran; more may follow.
    Continue,
    /// The clock reached `max_tick`.  Further calls do nothing.
    Finished,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S>` owns the agenda, the building and the arrival source.  Each
/// [`step`][Sim::step] pops one entry, runs the step it names, and applies
/// the resulting effects:
///
/// - `Reschedule` / `RescheduleImmediate` → cancel the slot's pending entry,
///   then insert the new one through the same slot.
/// - `Cancel` → cancel the slot's pending entry.
/// - `Post` / `PostImmediate` → plain insert outside any slot.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: ArrivalSource> {
    /// Global configuration (floors, home floor, max tick, …).
    pub config: SimConfig,

    /// Elevator, floor queues and riders.
    pub building: Building,

    pub(crate) agenda:   Agenda<Action>,
    pub(crate) handles:  Handles,
    pub(crate) arrivals: S,
    pub(crate) started:  bool,
    pub(crate) finished: bool,
}

impl<S: ArrivalSource> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the clock reaches `config.max_tick`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need the trace.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.step(observer)? == StepOutcome::Continue {}
        Ok(())
    }

    /// Execute the next agenda entry.
    ///
    /// The first call schedules the initial arrival.  Returns
    /// [`SimError::AgendaExhausted`] if nothing is pending before the run
    /// ends.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepOutcome> {
        if self.finished {
            return Ok(StepOutcome::Finished);
        }
        if !self.started {
            self.start();
        }

        let Ok(event) = self.agenda.pop_earliest() else {
            let now = self.agenda.now();
            error!(tick = now.0, "agenda empty before max tick");
            self.finished = true;
            return Err(SimError::AgendaExhausted { at: now });
        };

        let now = event.due;
        if now >= self.config.max_tick {
            self.finished = true;
            let stats = &self.building.stats;
            info!(
                tick = now.0,
                events = stats.events_processed,
                arrivals = stats.arrivals,
                alighted = stats.alighted,
                gave_up = stats.gave_up,
                "simulation finished"
            );
            observer.on_sim_end(now, stats);
            return Ok(StepOutcome::Finished);
        }

        trace!(tick = now.0, action = ?event.action, pending = self.agenda.len(), "dispatch");
        let outcome = self.dispatch(now, event.action)?;
        self.building.stats.events_processed += 1;

        let Outcome { effects, note } = outcome;
        self.apply(effects);
        if let Some(note) = note {
            observer.on_action(&TraceRecord::new(now, &self.building.elevator, note));
        }
        Ok(StepOutcome::Continue)
    }

    /// Current simulated time.
    pub fn now(&self) -> Tick {
        self.agenda.now()
    }

    pub fn stats(&self) -> &RunStats {
        &self.building.stats
    }

    /// Read-only view of the pending entries.
    pub fn agenda(&self) -> &Agenda<Action> {
        &self.agenda
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // ── Event processing ──────────────────────────────────────────────────

    fn start(&mut self) {
        self.started = true;
        info!(
            seed = self.config.seed,
            floors = self.config.floors,
            home_floor = self.config.home_floor,
            max_tick = self.config.max_tick.0,
            "simulation started"
        );
        self.agenda.insert_after(0, Action::Arrival);
    }

    fn dispatch(&mut self, now: Tick, action: Action) -> SimResult<Outcome> {
        let outcome = match action {
            Action::Arrival => match self.arrivals.next_arrival(self.building.floors()) {
                Some(sample) => self.building.arrive(now, sample)?,
                None => {
                    debug!(tick = now.0, "arrival source exhausted");
                    Outcome::default()
                }
            },
            Action::Elevator(step) => self.building.elevator_step(step),
            Action::Rider(rider, step) => self.building.rider_step(now, rider, step)?,
        };
        Ok(outcome)
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Reschedule { slot, delay, action } => {
                    self.handles.get_mut(slot).reschedule(&mut self.agenda, delay, action);
                }
                Effect::RescheduleImmediate { slot, action } => {
                    self.handles.get_mut(slot).reschedule_immediate(&mut self.agenda, action);
                }
                Effect::Cancel(slot) => {
                    self.handles.get_mut(slot).cancel(&mut self.agenda);
                }
                Effect::Post { delay, action } => {
                    self.agenda.insert_after(delay, action);
                }
                Effect::PostImmediate(action) => {
                    self.agenda.insert_immediate(action);
                }
            }
        }
    }
}
