//! `lift-agenda`: the pending-event structure that drives the simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`agenda`] | `Agenda<A>`, `Event<A>`, `EventHandle`                |
//! | [`handle`] | `HandleSlot`: reschedule-with-cancel primitive       |
//! | [`error`]  | `AgendaError`, `AgendaResult<T>`                      |
//!
//! # Ordering model (summary)
//!
//! ```text
//! key = (due, rank)
//!   sorted insert     rank = +seq   → ties fire first-scheduled-first
//!   immediate insert  rank = -seq   → ahead of every same-instant entry,
//!                                     newest immediate first
//! ```
//!
//! Every pending entry is due at or after the current instant, so an
//! immediate entry keyed at `now` is always the next one popped.

pub mod agenda;
pub mod error;
pub mod handle;


pub use agenda::{Agenda, Event, EventHandle};
pub use error::{AgendaError, AgendaResult};
pub use handle::HandleSlot;
