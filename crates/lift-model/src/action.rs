//! Continuations as data.
//!
//! An agenda entry holds an [`Action`] naming which step runs next and for
//! which entity.  Steps never schedule anything themselves; they return an
//! [`Outcome`] listing [`Effect`]s for the run loop to apply.

use lift_core::RiderId;

use crate::Step;

// ── Action ────────────────────────────────────────────────────────────────────

/// What an agenda entry does when it fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// U1: a new rider enters the system and the next arrival is arranged.
    Arrival,
    Elevator(ElevatorAction),
    Rider(RiderId, RiderAction),
}

impl From<ElevatorAction> for Action {
    fn from(a: ElevatorAction) -> Self {
        Action::Elevator(a)
    }
}

/// Entry points of the elevator's step functions.
///
/// E7 and E8 are split in two: the move itself, and the arrival check that
/// runs once the car has travelled a floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElevatorAction {
    WaitForCall,
    ChangeOfState,
    OpenDoors,
    LetPeopleOutIn,
    CloseDoors,
    PrepareToMove,
    GoUpAFloor,
    ReachedFloorAbove,
    GoDownAFloor,
    ReachedFloorBelow,
    SetInactionIndicator,
}

impl ElevatorAction {
    /// The E-step this action belongs to.
    pub fn step(self) -> Step {
        match self {
            ElevatorAction::WaitForCall => Step::WaitForCall,
            ElevatorAction::ChangeOfState => Step::ChangeOfState,
            ElevatorAction::OpenDoors => Step::OpenDoors,
            ElevatorAction::LetPeopleOutIn => Step::LetPeopleOutIn,
            ElevatorAction::CloseDoors => Step::CloseDoors,
            ElevatorAction::PrepareToMove => Step::PrepareToMove,
            ElevatorAction::GoUpAFloor | ElevatorAction::ReachedFloorAbove => Step::GoUpAFloor,
            ElevatorAction::GoDownAFloor | ElevatorAction::ReachedFloorBelow => Step::GoDownAFloor,
            ElevatorAction::SetInactionIndicator => Step::SetInactionIndicator,
        }
    }
}

/// Rider steps U2–U6.  U1 is [`Action::Arrival`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RiderAction {
    SignalAndWait,
    EnterQueue,
    GiveUp,
    GetIn,
    GetOut,
}

impl RiderAction {
    pub fn label(self) -> &'static str {
        match self {
            RiderAction::SignalAndWait => "U2",
            RiderAction::EnterQueue => "U3",
            RiderAction::GiveUp => "U4",
            RiderAction::GetIn => "U5",
            RiderAction::GetOut => "U6",
        }
    }
}

// ── Slot ──────────────────────────────────────────────────────────────────────

/// An independent thread of activity that holds at most one pending entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The elevator's main step sequence (everything except E5 and E9).
    Primary,
    /// The door-closing activity E5.
    Doors,
    /// The inactivity watchdog E9.
    Watchdog,
    /// A waiting rider's give-up timer.
    GiveUp(RiderId),
}

// ── Effect ────────────────────────────────────────────────────────────────────

/// A scheduling request produced by a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Cancel whatever `slot` holds, then run `action` after `delay`.
    Reschedule { slot: Slot, delay: u64, action: Action },
    /// Cancel whatever `slot` holds, then run `action` right now, ahead of
    /// every other entry due at this instant.
    RescheduleImmediate { slot: Slot, action: Action },
    /// Cancel whatever `slot` holds.
    Cancel(Slot),
    /// Run `action` after `delay`, outside any slot.
    Post { delay: u64, action: Action },
    /// Run `action` right now, outside any slot.
    PostImmediate(Action),
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// A human-readable description of what a step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    /// `E1`–`E9` or `U1`–`U6`.
    pub label: &'static str,
    pub text:  String,
}

/// Result of one step: effects to apply in order, plus an optional note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub effects: Vec<Effect>,
    pub note:    Option<Note>,
}

impl Outcome {
    pub fn reschedule(&mut self, slot: Slot, delay: u64, action: impl Into<Action>) {
        self.effects.push(Effect::Reschedule { slot, delay, action: action.into() });
    }

    pub fn reschedule_immediate(&mut self, slot: Slot, action: impl Into<Action>) {
        self.effects.push(Effect::RescheduleImmediate { slot, action: action.into() });
    }

    pub fn cancel(&mut self, slot: Slot) {
        self.effects.push(Effect::Cancel(slot));
    }

    pub fn post(&mut self, delay: u64, action: impl Into<Action>) {
        self.effects.push(Effect::Post { delay, action: action.into() });
    }

    pub fn post_immediate(&mut self, action: impl Into<Action>) {
        self.effects.push(Effect::PostImmediate(action.into()));
    }

    /// Attach the trace note.  A later call replaces an earlier one.
    pub fn note(&mut self, label: &'static str, text: impl Into<String>) {
        self.note = Some(Note { label, text: text.into() });
    }
}
