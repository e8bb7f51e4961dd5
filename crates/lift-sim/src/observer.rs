//! Trace sink trait and the record it receives.

use lift_core::Tick;
use lift_model::{Direction, Elevator, Note, RunStats};

/// One line of the simulation trace: the elevator's visible state right
/// after a step ran, plus what the step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    pub tick:      Tick,
    pub direction: Direction,
    pub floor:     usize,
    /// D1
    pub doors_transitioning: bool,
    /// D2
    pub active: bool,
    /// D3
    pub doors_idle_open: bool,
    /// `E1`–`E9` or `U1`–`U6`.
    pub label: &'static str,
    pub text:  String,
}

impl TraceRecord {
    pub fn new(tick: Tick, car: &Elevator, note: Note) -> Self {
        Self {
            tick,
            direction:           car.direction,
            floor:               car.floor,
            doors_transitioning: car.doors_transitioning,
            active:              car.active,
            doors_idle_open:     car.doors_idle_open,
            label:               note.label,
            text:                note.text,
        }
    }
}

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: collect labels
///
/// ```rust,ignore
/// struct Labels(Vec<&'static str>);
///
/// impl SimObserver for Labels {
///     fn on_action(&mut self, record: &TraceRecord) {
///         self.0.push(record.label);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every step that produced a trace note.
    fn on_action(&mut self, _record: &TraceRecord) {}

    /// Called once when the clock reaches `max_tick`.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
