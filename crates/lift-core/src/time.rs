//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter where one tick is a
//! tenth of a second.  All step delays in the elevator model (`+20`, `+76`,
//! `+51`, …) are whole ticks, so schedule arithmetic is exact.
//!
//! Unlike a fixed-step simulation, the clock jumps: it only ever takes the
//! values at which an agenda entry is due.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation time in tenths of a second.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks per simulated second.
    pub const PER_SECOND: u64 = 10;

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// Whole seconds, for human-facing output.
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / Self::PER_SECOND as f64
    }

    /// Build a tick from whole seconds.
    #[inline]
    pub fn from_secs(secs: u64) -> Tick {
        Tick(secs * Self::PER_SECOND)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickRange ─────────────────────────────────────────────────────────────────

/// A half-open duration range `[min, max)` in ticks, used for random
/// patience and inter-arrival draws.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickRange {
    pub min: u64,
    pub max: u64,
}

impl TickRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// `true` if `ticks` falls inside the range.
    #[inline]
    pub fn contains(&self, ticks: u64) -> bool {
        (self.min..self.max).contains(&ticks)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min >= self.max
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}
