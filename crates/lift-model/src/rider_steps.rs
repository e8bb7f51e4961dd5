//! Rider steps U1–U6.

use lift_core::{ArrivalSample, RiderId, Tick};
use tracing::debug;

use crate::{
    Action, Building, Caller, Direction, ElevatorAction, Exit, Location, ModelResult, Outcome,
    RiderAction, Slot, Step,
};

/// U5 → E5: a rider who picks a direction for a neutral car gets the doors
/// closed early.
pub const QUICK_CLOSE: u64 = 25;

impl Building {
    /// U1: a rider enters the system.  Arranges the next arrival and sends
    /// this rider straight to U2.
    pub fn arrive(&mut self, now: Tick, sample: ArrivalSample) -> ModelResult<Outcome> {
        sample.validate(self.floors())?;
        let mut out = Outcome::default();
        let rider = self.riders.spawn(&sample, now);
        self.stats.arrivals += 1;

        out.post(sample.inter_arrival, Action::Arrival);
        out.post_immediate(Action::Rider(rider, RiderAction::SignalAndWait));
        out.note(
            "U1",
            format!(
                "User {} arrives at floor {}, destination is {}.",
                rider.0, sample.origin, sample.destination
            ),
        );
        Ok(out)
    }

    /// Run one rider step.
    pub fn rider_step(&mut self, now: Tick, rider: RiderId, action: RiderAction) -> ModelResult<Outcome> {
        match action {
            RiderAction::SignalAndWait => self.signal_and_wait(rider),
            RiderAction::EnterQueue => self.enter_queue(rider),
            RiderAction::GiveUp => self.give_up(rider),
            RiderAction::GetIn => self.get_in(now, rider),
            RiderAction::GetOut => self.get_out(rider),
        }
    }

    /// U2: call the elevator, or catch it if it is already here.
    fn signal_and_wait(&mut self, rider: RiderId) -> ModelResult<Outcome> {
        self.expect_location(rider, Location::Arriving)?;
        let mut out = Outcome::default();
        let origin = self.riders.origin[rider.index()];
        let destination = self.riders.destination[rider.index()];
        let car = &mut self.elevator;

        if car.floor == origin && car.step == Step::CloseDoors {
            self.stats.door_reopens += 1;
            debug!(rider = rider.0, floor = origin, "rider reopens closing doors");
            out.reschedule_immediate(Slot::Primary, ElevatorAction::OpenDoors);
            out.note("U2", format!("User {} arrives at doors closing and stops them.", rider.0));
        } else if car.floor == origin && car.doors_idle_open {
            car.doors_idle_open = false;
            car.doors_transitioning = true;
            out.reschedule_immediate(Slot::Primary, ElevatorAction::LetPeopleOutIn);
            out.note("U2", format!("User {} arrives at open doors.", rider.0));
        } else {
            if destination > origin {
                car.call_up[origin] = true;
                out.note("U2", format!("User {} presses up button.", rider.0));
            } else {
                car.call_down[origin] = true;
                out.note("U2", format!("User {} presses down button.", rider.0));
            }
            if !car.active || car.is_dormant() {
                self.decide(Caller::RiderSignal, &mut out);
            }
        }

        out.post_immediate(Action::Rider(rider, RiderAction::EnterQueue));
        Ok(out)
    }

    /// U3: join the back of the floor queue and start the give-up timer.
    fn enter_queue(&mut self, rider: RiderId) -> ModelResult<Outcome> {
        self.expect_location(rider, Location::Arriving)?;
        let mut out = Outcome::default();
        let origin = self.riders.origin[rider.index()];

        self.queues[origin].push_back(rider, &mut self.riders.links);
        self.riders.location[rider.index()] = Location::Queued(origin);

        let patience = self.riders.patience[rider.index()];
        out.reschedule(Slot::GiveUp(rider), patience, Action::Rider(rider, RiderAction::GiveUp));
        out.note("U3", format!("User {} stands in queue in front of elevator.", rider.0));
        Ok(out)
    }

    /// U4: patience ran out.  Walk away unless the doors are open here and
    /// riders are already moving through them.
    fn give_up(&mut self, rider: RiderId) -> ModelResult<Outcome> {
        let origin = self.origin_of(rider)?;
        self.expect_location(rider, Location::Queued(origin))?;
        let mut out = Outcome::default();

        if self.elevator.floor != origin || !self.elevator.doors_transitioning {
            self.queues[origin].remove(rider, &mut self.riders.links);
            self.riders.location[rider.index()] = Location::Left(Exit::GaveUp);
            self.stats.gave_up += 1;
            debug!(rider = rider.0, floor = origin, "rider gives up");
            out.note("U4", format!("User {} decides to give up, leaves the system.", rider.0));
        } else {
            self.stats.almost_gave_up += 1;
            out.note("U4", format!("User {} almost gave up, but stays and waits.", rider.0));
        }
        Ok(out)
    }

    /// U5: step from the queue into the car and press the destination
    /// button.
    fn get_in(&mut self, now: Tick, rider: RiderId) -> ModelResult<Outcome> {
        let origin = self.origin_of(rider)?;
        self.expect_location(rider, Location::Queued(origin))?;
        let i = rider.index();
        let destination = self.riders.destination[i];
        let mut out = Outcome::default();

        self.queues[origin].remove(rider, &mut self.riders.links);
        out.cancel(Slot::GiveUp(rider));
        self.elevator.manifest.push_back(rider, &mut self.riders.links);
        self.riders.location[i] = Location::Aboard;
        self.riders.boarded_at[i] = Some(now);
        self.stats.boarded += 1;
        self.stats.total_wait_ticks += now.since(self.riders.arrived_at[i]);

        let car = &mut self.elevator;
        car.call_car[destination] = true;
        if car.direction == Direction::Neutral {
            car.direction = if destination > origin { Direction::GoingUp } else { Direction::GoingDown };
            out.reschedule(Slot::Doors, QUICK_CLOSE, ElevatorAction::CloseDoors);
        }
        out.note("U5", format!("User {} gets in.", rider.0));
        Ok(out)
    }

    /// U6: leave the car and the system.
    fn get_out(&mut self, rider: RiderId) -> ModelResult<Outcome> {
        self.expect_location(rider, Location::Aboard)?;
        let mut out = Outcome::default();
        self.elevator.manifest.remove(rider, &mut self.riders.links);
        self.riders.location[rider.index()] = Location::Left(Exit::Alighted);
        self.stats.alighted += 1;
        out.note("U6", format!("User {} gets out, leaves the system.", rider.0));
        Ok(out)
    }
}
