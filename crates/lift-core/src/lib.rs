//! `lift-core`: foundational types for the `rust_lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `RiderId`                                              |
//! | [`time`]       | `Tick` (tenths of a second), `TickRange`               |
//! | [`config`]     | `SimConfig`, `ArrivalConfig`                           |
//! | [`rng`]        | `SimRng`                                               |
//! | [`arrivals`]   | `ArrivalSource`, `RandomArrivals`, `ScriptedArrivals`  |
//! | [`error`]      | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod arrivals;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrivals::{ArrivalSample, ArrivalSource, RandomArrivals, ScriptedArrivals};
pub use config::{ArrivalConfig, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::RiderId;
pub use rng::SimRng;
pub use time::{Tick, TickRange};
