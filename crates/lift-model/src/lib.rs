//! `lift-model`: the elevator and its riders as explicit state machines.
//!
//! # Crate layout
//!
//! | Module             | Contents                                               |
//! |--------------------|--------------------------------------------------------|
//! | [`action`]         | `Action`, `Slot`, `Effect`, `Outcome`                  |
//! | [`elevator`]       | `Elevator`, `Direction`, `Step`, call registers        |
//! | [`riders`]         | `RiderStore` (SoA), `RiderList`, `Location`            |
//! | [`building`]       | `Building`: elevator + floor queues + riders          |
//! | [`elevator_steps`] | Elevator steps E1–E9                                   |
//! | [`decision`]       | Takes the car out of neutral                           |
//! | [`rider_steps`]    | Rider steps U1–U6                                      |
//! | [`stats`]          | `RunStats` counters                                    |
//!
//! # Transition model
//!
//! Every step is a method on [`Building`] that mutates state in place and
//! returns an [`Outcome`]: the scheduling [`Effect`]s it wants applied, in
//! order, plus an optional trace [`Note`].  Nothing here touches the agenda,
//! so each transition can be tested without running a simulation.
//!
//! ```text
//! (Building, Action) ──step──▶ (Building', [Effect], Note?)
//! ```

pub mod action;
pub mod building;
pub mod decision;
pub mod elevator;
pub mod elevator_steps;
pub mod error;
pub mod rider_steps;
pub mod riders;
pub mod stats;


pub use action::{Action, Effect, ElevatorAction, Note, Outcome, RiderAction, Slot};
pub use building::Building;
pub use decision::Caller;
pub use elevator::{Direction, Elevator, Step};
pub use error::{ModelError, ModelResult};
pub use riders::{Exit, Location, RiderLinks, RiderList, RiderStore};
pub use stats::RunStats;
