//! `lift-sim`: run loop for the rust_lift elevator simulator.
//!
//! # Event loop
//!
//! ```text
//! schedule U1 at T0
//! loop:
//!   ① Pop       take the earliest agenda entry; the clock jumps to its
//!                due time.  An empty agenda is fatal.
//!   ② Stop      if the clock has reached `config.max_tick`, finish.
//!   ③ Dispatch  run the step the entry names (U1, U2–U6 or E1–E9) against
//!                the `Building`, producing an `Outcome`.
//!   ④ Apply     apply the outcome's effects in order, each slot effect
//!                through that slot's `HandleSlot`.
//!   ⑤ Trace     if the step left a note, hand a `TraceRecord` to the
//!                observer.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::knuth(42)).build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{} riders served", sim.stats().alighted);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TraceRecord};
pub use sim::{Sim, StepOutcome};
