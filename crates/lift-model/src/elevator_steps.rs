//! Elevator steps E1–E9.
//!
//! Delays are in ticks (tenths of a second).  Each method mutates the car and
//! returns the effects that continue its sequence; `Slot::Primary` carries the
//! main sequence, `Slot::Doors` the independent E5 and `Slot::Watchdog` E9.

use tracing::debug;

use crate::{Action, Building, Caller, Direction, ElevatorAction, Outcome, RiderAction, Slot, Step};

/// E3 → E4: doors finish opening.
pub const DOORS_OPEN: u64 = 20;
/// E3 → E5: default time before the doors try to close.
pub const DOORS_CLOSE_AFTER: u64 = 76;
/// E3 → E9: inactivity watchdog period.
pub const WATCHDOG: u64 = 300;
/// E4 → E4: one rider passes through the doorway.
pub const RIDER_TRANSFER: u64 = 25;
/// E5 → E5: doors spring back open while someone is in the way.
pub const DOOR_FLUTTER: u64 = 40;
/// E5 → E6: doors finish closing.
pub const DOORS_CLOSING: u64 = 20;
/// E6 → E7/E8: build up speed.
pub const ACCELERATE: u64 = 15;
pub const FLOOR_UP: u64 = 51;
pub const DECELERATE_UP: u64 = 14;
pub const FLOOR_DOWN: u64 = 61;
pub const DECELERATE_DOWN: u64 = 23;

impl Building {
    /// Run one elevator step.
    pub fn elevator_step(&mut self, action: ElevatorAction) -> Outcome {
        match action {
            ElevatorAction::WaitForCall => self.wait_for_call(),
            ElevatorAction::ChangeOfState => self.change_of_state(),
            ElevatorAction::OpenDoors => self.open_doors(),
            ElevatorAction::LetPeopleOutIn => self.let_people_out_in(),
            ElevatorAction::CloseDoors => self.close_doors(),
            ElevatorAction::PrepareToMove => self.prepare_to_move(),
            ElevatorAction::GoUpAFloor => self.go_up_a_floor(),
            ElevatorAction::ReachedFloorAbove => self.reached_floor_above(),
            ElevatorAction::GoDownAFloor => self.go_down_a_floor(),
            ElevatorAction::ReachedFloorBelow => self.reached_floor_below(),
            ElevatorAction::SetInactionIndicator => self.set_inaction_indicator(),
        }
    }

    /// E1: park.  Only the decision procedure wakes the car from here.
    fn wait_for_call(&mut self) -> Outcome {
        let mut out = Outcome::default();
        self.elevator.step = Step::WaitForCall;
        self.stats.dormant_entries += 1;
        debug!(floor = self.elevator.floor, "elevator dormant");
        out.note("E1", "Elevator dormant.");
        out
    }

    /// E2: the car has stopped at a floor.  Reverse or go neutral when
    /// nothing is left ahead, then open the doors.
    fn change_of_state(&mut self) -> Outcome {
        let mut out = Outcome::default();
        let car = &mut self.elevator;
        car.step = Step::ChangeOfState;

        let settled = match car.direction {
            Direction::GoingUp if !car.calls_above() => {
                car.direction = if car.calls_below() { Direction::GoingDown } else { Direction::Neutral };
                true
            }
            Direction::GoingDown if !car.calls_below() => {
                car.direction = if car.calls_above() { Direction::GoingUp } else { Direction::Neutral };
                true
            }
            _ => false,
        };
        if settled {
            let floor = car.floor;
            car.clear_calls_at(floor);
        }

        out.reschedule_immediate(Slot::Primary, ElevatorAction::OpenDoors);
        out.note("E2", format!("Elevator stops at floor {}.", car.floor));
        out
    }

    /// E3: start opening the doors and arm the close timer and the watchdog.
    fn open_doors(&mut self) -> Outcome {
        let mut out = Outcome::default();
        let car = &mut self.elevator;
        car.step = Step::OpenDoors;
        car.doors_transitioning = true;
        car.active = true;

        out.reschedule(Slot::Watchdog, WATCHDOG, ElevatorAction::SetInactionIndicator);
        out.reschedule(Slot::Doors, DOORS_CLOSE_AFTER, ElevatorAction::CloseDoors);
        out.reschedule(Slot::Primary, DOORS_OPEN, ElevatorAction::LetPeopleOutIn);
        out.note("E3", "Elevator doors start to open.");
        out
    }

    /// E4: let one rider out (most recently boarded first), else one rider in
    /// (front of the queue), else leave the doors idle.
    fn let_people_out_in(&mut self) -> Outcome {
        let mut out = Outcome::default();
        self.elevator.step = Step::LetPeopleOutIn;
        let floor = self.elevator.floor;

        let leaving = self
            .elevator
            .manifest
            .iter_rev(&self.riders.links)
            .find(|id| self.riders.destination[id.index()] == floor);

        if let Some(rider) = leaving {
            out.post_immediate(Action::Rider(rider, RiderAction::GetOut));
            out.reschedule(Slot::Primary, RIDER_TRANSFER, ElevatorAction::LetPeopleOutIn);
            out.note("E4", format!("Doors are open. User {} about to exit.", rider.0));
        } else if let Some(rider) = self.queues[floor].front() {
            out.post_immediate(Action::Rider(rider, RiderAction::GetIn));
            out.reschedule(Slot::Primary, RIDER_TRANSFER, ElevatorAction::LetPeopleOutIn);
            out.note("E4", format!("Doors are open. User {} about to enter.", rider.0));
        } else {
            self.elevator.doors_transitioning = false;
            self.elevator.doors_idle_open = true;
            out.note("E4", "Doors are open. Nobody outside elevator.");
        }
        out
    }

    /// E5: close the doors, unless someone is still in the doorway.
    fn close_doors(&mut self) -> Outcome {
        let mut out = Outcome::default();
        let car = &mut self.elevator;
        car.step = Step::CloseDoors;

        if car.doors_transitioning {
            self.stats.door_flutters += 1;
            out.reschedule(Slot::Doors, DOOR_FLUTTER, ElevatorAction::CloseDoors);
            out.note("E5", "Doors flutter.");
        } else {
            car.doors_idle_open = false;
            out.reschedule(Slot::Primary, DOORS_CLOSING, ElevatorAction::PrepareToMove);
            out.note("E5", "Elevator doors start to close.");
        }
        out
    }

    /// E6: doors are shut.  Clear the requests served here and pick the
    /// next move, or go dormant.
    fn prepare_to_move(&mut self) -> Outcome {
        let mut out = Outcome::default();
        let car = &mut self.elevator;
        car.step = Step::PrepareToMove;

        let floor = car.floor;
        car.call_car[floor] = false;
        if car.direction != Direction::GoingDown {
            car.call_up[floor] = false;
        }
        if car.direction != Direction::GoingUp {
            car.call_down[floor] = false;
        }

        self.decide(Caller::PrepareToMove, &mut out);

        match self.elevator.direction {
            Direction::Neutral => {
                out.reschedule_immediate(Slot::Primary, ElevatorAction::WaitForCall);
                out.note("E6", "Elevator about to go dormant.");
            }
            direction => {
                if self.elevator.active {
                    out.cancel(Slot::Watchdog);
                }
                if direction == Direction::GoingUp {
                    out.reschedule(Slot::Primary, ACCELERATE, ElevatorAction::GoUpAFloor);
                    out.note("E6", "Elevator about to go up.");
                } else {
                    out.reschedule(Slot::Primary, ACCELERATE, ElevatorAction::GoDownAFloor);
                    out.note("E6", "Elevator about to go down.");
                }
            }
        }
        out
    }

    /// E7: climb one floor.
    fn go_up_a_floor(&mut self) -> Outcome {
        let mut out = Outcome::default();
        self.elevator.step = Step::GoUpAFloor;
        self.elevator.floor += 1;
        out.reschedule(Slot::Primary, FLOOR_UP, ElevatorAction::ReachedFloorAbove);
        out.note("E7", format!("Elevator moving up to floor {}.", self.elevator.floor));
        out
    }

    /// E7, continued: stop here or keep climbing.
    fn reached_floor_above(&mut self) -> Outcome {
        let mut out = Outcome::default();
        let car = &self.elevator;
        let f = car.floor;
        let stop = car.call_car[f]
            || car.call_up[f]
            || ((f == self.home_floor() || car.call_down[f]) && !car.calls_above());
        debug_assert!(stop || f + 1 < car.floors(), "car reached the top floor with no call there");

        if stop {
            out.reschedule(Slot::Primary, DECELERATE_UP, ElevatorAction::ChangeOfState);
        } else {
            out.reschedule_immediate(Slot::Primary, ElevatorAction::GoUpAFloor);
        }
        out
    }

    /// E8: descend one floor.
    fn go_down_a_floor(&mut self) -> Outcome {
        let mut out = Outcome::default();
        self.elevator.step = Step::GoDownAFloor;
        self.elevator.floor -= 1;
        out.reschedule(Slot::Primary, FLOOR_DOWN, ElevatorAction::ReachedFloorBelow);
        out.note("E8", format!("Elevator moving down to floor {}.", self.elevator.floor));
        out
    }

    /// E8, continued: stop here or keep descending.
    fn reached_floor_below(&mut self) -> Outcome {
        let mut out = Outcome::default();
        let car = &self.elevator;
        let f = car.floor;
        let stop = car.call_car[f]
            || car.call_down[f]
            || ((f == self.home_floor() || car.call_up[f]) && !car.calls_below());
        debug_assert!(stop || f > 0, "car reached the ground floor with no call there");

        if stop {
            out.reschedule(Slot::Primary, DECELERATE_DOWN, ElevatorAction::ChangeOfState);
        } else {
            out.reschedule_immediate(Slot::Primary, ElevatorAction::GoDownAFloor);
        }
        out
    }

    /// E9: the car has sat still too long.  Runs independently of the main
    /// sequence, so it leaves `step` alone.
    fn set_inaction_indicator(&mut self) -> Outcome {
        let mut out = Outcome::default();
        self.elevator.active = false;
        self.decide(Caller::Watchdog, &mut out);
        out.note("E9", "Elevator not active.");
        out
    }
}
