//! Rider storage and the lists that hold riders.
//!
//! # Layout
//!
//! Riders live in Structure-of-Arrays form in [`RiderStore`], indexed by
//! [`RiderId`].  A rider belongs to at most one list at a time (a floor
//! queue or the car's manifest), so a single `prev`/`next` pair per rider in
//! [`RiderLinks`] is enough to thread every list through the same arena.
//! [`RiderList`] itself is only a head, a tail, and a length.
//!
//! This gives O(1) push, O(1) removal of any member (a rider giving up from
//! the middle of a queue), and iteration from either end.

use lift_core::{ArrivalSample, RiderId, Tick};

// ── Location ──────────────────────────────────────────────────────────────────

/// Why a rider left the system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Exit {
    Alighted,
    GaveUp,
}

/// Which container currently holds a rider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// Created by U1, not yet queued.
    Arriving,
    /// Waiting in the queue of this floor.
    Queued(usize),
    /// In the car's manifest.
    Aboard,
    /// Gone from the system.
    Left(Exit),
}

// ── RiderLinks ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Link {
    prev: Option<RiderId>,
    next: Option<RiderId>,
}

/// The shared `prev`/`next` arena every [`RiderList`] is threaded through.
#[derive(Clone, Debug, Default)]
pub struct RiderLinks(Vec<Link>);

impl RiderLinks {
    fn grow_to(&mut self, len: usize) {
        if self.0.len() < len {
            self.0.resize(len, Link::default());
        }
    }

    fn get(&self, id: RiderId) -> Link {
        self.0[id.index()]
    }

    fn get_mut(&mut self, id: RiderId) -> &mut Link {
        &mut self.0[id.index()]
    }
}

// ── RiderList ─────────────────────────────────────────────────────────────────

/// An ordered list of riders threaded through [`RiderLinks`].
///
/// Floor queues use it first-in-first-out (`push_back` + `front`); the
/// manifest is searched from `back`, most recently boarded first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RiderList {
    head: Option<RiderId>,
    tail: Option<RiderId>,
    len:  usize,
}

impl RiderList {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<RiderId> {
        self.head
    }

    pub fn back(&self) -> Option<RiderId> {
        self.tail
    }

    /// Append `id`.  The rider must not be a member of any list.
    pub fn push_back(&mut self, id: RiderId, links: &mut RiderLinks) {
        links.grow_to(id.index() + 1);
        *links.get_mut(id) = Link { prev: self.tail, next: None };
        match self.tail {
            Some(tail) => links.get_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Unlink `id`.  The rider must be a member of this list.
    pub fn remove(&mut self, id: RiderId, links: &mut RiderLinks) {
        let Link { prev, next } = links.get(id);
        match prev {
            Some(p) => links.get_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => links.get_mut(n).prev = prev,
            None => self.tail = prev,
        }
        *links.get_mut(id) = Link::default();
        self.len -= 1;
    }

    /// Members from front (oldest) to back (newest).
    pub fn iter<'a>(&self, links: &'a RiderLinks) -> impl Iterator<Item = RiderId> + 'a {
        std::iter::successors(self.head, move |&id| links.get(id).next)
    }

    /// Members from back (newest) to front (oldest).
    pub fn iter_rev<'a>(&self, links: &'a RiderLinks) -> impl Iterator<Item = RiderId> + 'a {
        std::iter::successors(self.tail, move |&id| links.get(id).prev)
    }
}

// ── RiderStore ────────────────────────────────────────────────────────────────

/// Every rider that has entered the system, alive or gone.
///
/// Ids are handed out sequentially and never reused, so a rider that leaves
/// keeps its row as [`Location::Left`] and the columns grow with the number
/// of arrivals in the run.  Detached riders are unlinked from every list and
/// nothing on the agenda refers to them.
#[derive(Clone, Debug, Default)]
pub struct RiderStore {
    pub origin:      Vec<usize>,
    pub destination: Vec<usize>,
    pub patience:    Vec<u64>,
    pub arrived_at:  Vec<Tick>,
    pub boarded_at:  Vec<Option<Tick>>,
    pub location:    Vec<Location>,
    pub links:       RiderLinks,
}

impl RiderStore {
    /// Register a new rider in the `Arriving` state.
    pub fn spawn(&mut self, sample: &ArrivalSample, now: Tick) -> RiderId {
        let id = RiderId(self.origin.len() as u32);
        self.origin.push(sample.origin);
        self.destination.push(sample.destination);
        self.patience.push(sample.patience);
        self.arrived_at.push(now);
        self.boarded_at.push(None);
        self.location.push(Location::Arriving);
        self.links.grow_to(self.origin.len());
        id
    }

    /// Total riders ever created.
    pub fn len(&self) -> usize {
        self.origin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_empty()
    }

    /// Riders still in the system.
    pub fn present(&self) -> usize {
        self.location
            .iter()
            .filter(|l| !matches!(l, Location::Left(_)))
            .count()
    }
}
