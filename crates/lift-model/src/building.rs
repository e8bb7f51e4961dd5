//! `Building`: all mutable simulation state except the agenda.

use lift_core::{RiderId, SimConfig};

use crate::{Elevator, Location, ModelError, ModelResult, RiderList, RiderStore, RunStats};

/// The elevator, one queue per floor, and every rider.
///
/// Step functions (E1–E9 in [`elevator_steps`][crate::elevator_steps], U1–U6
/// in [`rider_steps`][crate::rider_steps]) are methods on this type.
#[derive(Clone, Debug)]
pub struct Building {
    pub elevator: Elevator,

    /// `queues[f]` holds the riders waiting at floor `f`, oldest first.
    pub queues: Vec<RiderList>,

    pub riders: RiderStore,

    pub stats: RunStats,

    home_floor: usize,
}

impl Building {
    /// An empty building with a dormant car at `home_floor`.
    ///
    /// Callers are expected to have validated `floors` and `home_floor`
    /// (see [`SimConfig::validate`]).
    pub fn new(floors: usize, home_floor: usize) -> Self {
        Self {
            elevator: Elevator::new(floors, home_floor),
            queues: vec![RiderList::default(); floors],
            riders: RiderStore::default(),
            stats: RunStats::default(),
            home_floor,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.floors, config.home_floor)
    }

    pub fn floors(&self) -> usize {
        self.queues.len()
    }

    pub fn home_floor(&self) -> usize {
        self.home_floor
    }

    /// Where `rider` is right now.
    pub fn location(&self, rider: RiderId) -> ModelResult<Location> {
        self.riders
            .location
            .get(rider.index())
            .copied()
            .ok_or(ModelError::UnknownRider(rider))
    }

    /// The floor `rider` arrived on.
    pub(crate) fn origin_of(&self, rider: RiderId) -> ModelResult<usize> {
        self.riders
            .origin
            .get(rider.index())
            .copied()
            .ok_or(ModelError::UnknownRider(rider))
    }

    pub(crate) fn expect_location(&self, rider: RiderId, expected: Location) -> ModelResult<()> {
        let found = self.location(rider)?;
        if found == expected {
            Ok(())
        } else {
            Err(ModelError::UnexpectedLocation { rider, expected, found })
        }
    }

    /// Check that every rider is in exactly the container its `Location`
    /// names, and that no list holds anyone else.
    pub fn verify_membership(&self) -> ModelResult<()> {
        let mut seen = vec![None; self.riders.len()];
        let mut claim = |id: RiderId, holder: Location| -> ModelResult<()> {
            match seen.get_mut(id.index()) {
                None => Err(ModelError::UnknownRider(id)),
                Some(Some(prev)) => Err(ModelError::Membership(format!(
                    "{id} is in both {prev:?} and {holder:?}"
                ))),
                Some(slot) => {
                    *slot = Some(holder);
                    Ok(())
                }
            }
        };

        for (floor, queue) in self.queues.iter().enumerate() {
            let mut count = 0;
            for id in queue.iter(&self.riders.links) {
                claim(id, Location::Queued(floor))?;
                count += 1;
            }
            if count != queue.len() {
                return Err(ModelError::Membership(format!(
                    "queue {floor} reports {} riders but links {count}",
                    queue.len()
                )));
            }
        }
        for id in self.elevator.manifest.iter(&self.riders.links) {
            claim(id, Location::Aboard)?;
        }

        for (i, (&location, held)) in self.riders.location.iter().zip(&seen).enumerate() {
            let listed = matches!(location, Location::Queued(_) | Location::Aboard);
            match held {
                Some(holder) if *holder == location => {}
                None if !listed => {}
                _ => {
                    return Err(ModelError::Membership(format!(
                        "RiderId({i}) says {location:?} but is held by {held:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}
