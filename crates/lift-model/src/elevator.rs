//! The car: position, direction, door flags, and call registers.

use std::fmt;

use crate::RiderList;

// ── Direction ─────────────────────────────────────────────────────────────────

/// The lighted arrow inside the car.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    GoingUp,
    GoingDown,
    #[default]
    Neutral,
}

impl Direction {
    /// `U`, `D` or `N`.
    pub fn symbol(self) -> char {
        match self {
            Direction::GoingUp => 'U',
            Direction::GoingDown => 'D',
            Direction::Neutral => 'N',
        }
    }

    /// The direction from `from` towards `to`, or `None` if they are equal.
    pub fn towards(from: usize, to: usize) -> Option<Direction> {
        match from.cmp(&to) {
            std::cmp::Ordering::Less => Some(Direction::GoingUp),
            std::cmp::Ordering::Greater => Some(Direction::GoingDown),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::GoingUp => "going up",
            Direction::GoingDown => "going down",
            Direction::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

// ── Step ──────────────────────────────────────────────────────────────────────

/// The phase the elevator's main sequence is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// E1: dormant at the home floor, doors closed.
    #[default]
    WaitForCall,
    /// E2: just stopped; decide whether to change direction.
    ChangeOfState,
    /// E3
    OpenDoors,
    /// E4: passing riders out and in, one at a time.
    LetPeopleOutIn,
    /// E5: doors closing, or fluttering while someone is in the doorway.
    CloseDoors,
    /// E6
    PrepareToMove,
    /// E7
    GoUpAFloor,
    /// E8
    GoDownAFloor,
    /// E9: the independent inactivity watchdog.
    SetInactionIndicator,
}

impl Step {
    pub fn label(self) -> &'static str {
        match self {
            Step::WaitForCall => "E1",
            Step::ChangeOfState => "E2",
            Step::OpenDoors => "E3",
            Step::LetPeopleOutIn => "E4",
            Step::CloseDoors => "E5",
            Step::PrepareToMove => "E6",
            Step::GoUpAFloor => "E7",
            Step::GoDownAFloor => "E8",
            Step::SetInactionIndicator => "E9",
        }
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// Physical and logical state of the single car.
///
/// Call registers are indexed by floor.  Hall buttons set `call_up` /
/// `call_down`, buttons inside the car set `call_car`; the elevator clears
/// them once the request is served.
#[derive(Clone, Debug)]
pub struct Elevator {
    pub floor:     usize,
    pub direction: Direction,
    pub step:      Step,

    /// D1: someone is getting in or out right now.
    pub doors_transitioning: bool,
    /// D2: the car has moved or opened its doors within the last watchdog
    /// period.
    pub active: bool,
    /// D3: doors are open and nobody is using them.
    pub doors_idle_open: bool,

    pub call_up:   Vec<bool>,
    pub call_down: Vec<bool>,
    pub call_car:  Vec<bool>,

    /// Riders on board, in boarding order.
    pub manifest: RiderList,
}

impl Elevator {
    /// A dormant car at `home_floor` with every flag cleared.
    pub fn new(floors: usize, home_floor: usize) -> Self {
        Self {
            floor:               home_floor,
            direction:           Direction::Neutral,
            step:                Step::WaitForCall,
            doors_transitioning: false,
            active:              false,
            doors_idle_open:     false,
            call_up:             vec![false; floors],
            call_down:           vec![false; floors],
            call_car:            vec![false; floors],
            manifest:            RiderList::default(),
        }
    }

    pub fn floors(&self) -> usize {
        self.call_car.len()
    }

    /// `true` while the main sequence sits at E1.
    #[inline]
    pub fn is_dormant(&self) -> bool {
        self.step == Step::WaitForCall
    }

    /// Any of the three registers asserted for `floor`.
    #[inline]
    pub fn has_call_at(&self, floor: usize) -> bool {
        self.call_up[floor] || self.call_down[floor] || self.call_car[floor]
    }

    /// Any register asserted strictly above the current floor.
    pub fn calls_above(&self) -> bool {
        (self.floor + 1..self.floors()).any(|j| self.has_call_at(j))
    }

    /// Any register asserted strictly below the current floor.
    pub fn calls_below(&self) -> bool {
        (0..self.floor).any(|j| self.has_call_at(j))
    }

    /// Any register asserted anywhere.
    pub fn any_call(&self) -> bool {
        (0..self.floors()).any(|j| self.has_call_at(j))
    }

    pub fn clear_calls_at(&mut self, floor: usize) {
        self.call_up[floor] = false;
        self.call_down[floor] = false;
        self.call_car[floor] = false;
    }
}
