//! The decision procedure: when and where a neutral car starts moving.

use crate::{Building, Direction, ElevatorAction, Outcome, Slot};

/// Delay before the car reacts to a decision made while dormant.
pub const WAKE_UP: u64 = 20;

/// Who invoked the decision procedure.  Only E6 may fall back to the home
/// floor when no call is pending.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Caller {
    /// E6, doors just closed.
    PrepareToMove,
    /// E9, the inactivity watchdog.
    Watchdog,
    /// U2, a rider pressed a hall button.
    RiderSignal,
}

impl Building {
    /// Take the car out of neutral if a call warrants it.
    ///
    /// Sets `direction` and, when the car is dormant at E1, schedules its
    /// wake-up on the primary slot.  When called from E6 or E9 the caller's
    /// own flow carries on from the new direction.
    pub fn decide(&mut self, caller: Caller, out: &mut Outcome) {
        let home = self.home_floor();
        let car = &mut self.elevator;

        if car.direction != Direction::Neutral {
            return;
        }

        // Somebody is waiting right where the car is parked.
        if car.is_dormant() && car.has_call_at(home) {
            out.reschedule(Slot::Primary, WAKE_UP, ElevatorAction::OpenDoors);
            return;
        }

        let here = car.floor;
        let target = (0..car.floors()).find(|&j| j != here && car.has_call_at(j));
        let j = match (target, caller) {
            (Some(j), _) => j,
            (None, Caller::PrepareToMove) => home,
            (None, _) => return,
        };

        if let Some(direction) = Direction::towards(here, j) {
            car.direction = direction;
        }

        if car.is_dormant() && j != home {
            out.reschedule(Slot::Primary, WAKE_UP, ElevatorAction::PrepareToMove);
        }
    }
}
