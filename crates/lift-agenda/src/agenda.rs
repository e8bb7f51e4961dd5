//! `Agenda`: the time-ordered list of pending actions.
//!
//! # Why a `BTreeMap`
//!
//! Each entry is keyed by its own [`EventHandle`], so cancelling is a keyed
//! removal (O(log n)) rather than a scan, and the earliest entry is always
//! `first_key_value`.  The handle carries everything needed to find the entry
//! again, which lets callers hold on to it without borrowing the agenda.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::{AgendaError, AgendaResult};

// ── EventHandle ───────────────────────────────────────────────────────────────

/// Opaque reference to one agenda entry.
///
/// Ordering on handles *is* the firing order: earlier `due` first, then by
/// rank (immediate entries have negative rank).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventHandle {
    due:  Tick,
    rank: i64,
}

impl EventHandle {
    /// When the referenced entry fires.
    #[inline]
    pub fn due(&self) -> Tick {
        self.due
    }

    /// `true` if the entry was placed with [`Agenda::insert_immediate`].
    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.rank < 0
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// An entry removed from the agenda by [`Agenda::pop_earliest`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event<A> {
    pub due:    Tick,
    pub handle: EventHandle,
    pub action: A,
}

// ── Agenda ────────────────────────────────────────────────────────────────────

/// Time-ordered pending actions plus the simulation clock.
///
/// The clock lives here because immediate insertion is defined relative to
/// "now", and "now" only ever advances by popping.
#[derive(Debug, Clone)]
pub struct Agenda<A> {
    entries:  BTreeMap<EventHandle, A>,
    now:      Tick,
    next_seq: i64,
}

impl<A> Default for Agenda<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Agenda<A> {
    pub fn new() -> Self {
        Self::starting_at(Tick::ZERO)
    }

    /// An empty agenda whose clock reads `now`.
    pub fn starting_at(now: Tick) -> Self {
        Self { entries: BTreeMap::new(), now, next_seq: 1 }
    }

    /// The current simulated time: the due time of the last popped entry.
    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    fn next_seq(&mut self) -> i64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Insert `action` to fire at `at`, after every entry already due at or
    /// before `at`.
    pub fn insert_sorted(&mut self, at: Tick, action: A) -> AgendaResult<EventHandle> {
        if at < self.now {
            return Err(AgendaError::ScheduledInPast { at, now: self.now });
        }
        let handle = EventHandle { due: at, rank: self.next_seq() };
        self.entries.insert(handle, action);
        Ok(handle)
    }

    /// Insert `action` to fire `delay` ticks from now.
    pub fn insert_after(&mut self, delay: u64, action: A) -> EventHandle {
        let handle = EventHandle { due: self.now + delay, rank: self.next_seq() };
        self.entries.insert(handle, action);
        handle
    }

    /// Insert `action` at the current instant, ahead of everything else
    /// pending, including earlier immediate insertions.
    pub fn insert_immediate(&mut self, action: A) -> EventHandle {
        let handle = EventHandle { due: self.now, rank: -self.next_seq() };
        self.entries.insert(handle, action);
        handle
    }

    /// Remove the entry if it is still pending.  Returns its action, or
    /// `None` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: EventHandle) -> Option<A> {
        self.entries.remove(&handle)
    }

    /// `true` if `handle` still refers to a pending entry.
    pub fn contains(&self, handle: EventHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Remove the earliest entry and advance the clock to its due time.
    ///
    /// An empty agenda means some step forgot to schedule its successor; the
    /// caller should treat [`AgendaError::Empty`] as fatal.
    pub fn pop_earliest(&mut self) -> AgendaResult<Event<A>> {
        let (handle, action) = self
            .entries
            .pop_first()
            .ok_or(AgendaError::Empty { now: self.now })?;
        debug_assert!(handle.due >= self.now, "agenda entry due before the clock");
        self.now = handle.due;
        Ok(Event { due: handle.due, handle, action })
    }

    /// Due time of the next entry, or `None` if the agenda is empty.
    pub fn peek_due(&self) -> Option<Tick> {
        self.entries.keys().next().map(|h| h.due)
    }

    /// Pending entries in firing order.
    pub fn iter(&self) -> impl Iterator<Item = (EventHandle, &A)> {
        self.entries.iter().map(|(h, a)| (*h, a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
