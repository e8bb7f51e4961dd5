//! Scenario tests for lift-sim.
//!
//! Timelines in the comments are in ticks and were traced step by step
//! against the delays in `lift_model::elevator_steps`.

use lift_core::{ArrivalConfig, ArrivalSample, RiderId, ScriptedArrivals, SimConfig, Tick};

use crate::{SimObserver, TraceRecord};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Five floors, home floor 2.
fn test_config(max_tick: u64) -> SimConfig {
    SimConfig {
        max_tick:   Tick(max_tick),
        seed:       7,
        floors:     5,
        home_floor: 2,
        arrivals:   ArrivalConfig::knuth(),
    }
}

fn rider(origin: usize, destination: usize, patience: u64, inter_arrival: u64) -> ArrivalSample {
    ArrivalSample { origin, destination, patience, inter_arrival }
}

fn script(samples: impl IntoIterator<Item = ArrivalSample>) -> ScriptedArrivals {
    ScriptedArrivals::new(samples)
}

/// Records every trace line and the end-of-run callback.
#[derive(Default)]
struct Recorder {
    records: Vec<TraceRecord>,
    ended:   Option<Tick>,
}

impl Recorder {
    fn labels(&self) -> Vec<&'static str> {
        self.records.iter().map(|r| r.label).collect()
    }

    fn ticks_of(&self, label: &str) -> Vec<Tick> {
        self.records.iter().filter(|r| r.label == label).map(|r| r.tick).collect()
    }
}

impl SimObserver for Recorder {
    fn on_action(&mut self, record: &TraceRecord) {
        self.records.push(record.clone());
    }

    fn on_sim_end(&mut self, final_tick: Tick, _stats: &lift_model::RunStats) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use lift_core::{TickRange, SimConfig};
    use lift_model::{Direction, Step};

    use super::*;
    use crate::{SimBuilder, SimError};

    #[test]
    fn builds_dormant_at_home() {
        let sim = SimBuilder::new(SimConfig::knuth(1)).build().unwrap();
        let car = &sim.building.elevator;
        assert_eq!(car.floor, 2);
        assert_eq!(car.direction, Direction::Neutral);
        assert_eq!(car.step, Step::WaitForCall);
        assert!(!car.doors_transitioning && !car.active && !car.doors_idle_open);
        assert!(sim.agenda().is_empty());
        assert_eq!(sim.now(), Tick::ZERO);
    }

    #[test]
    fn rejects_single_floor() {
        let mut config = test_config(100);
        config.floors = 1;
        config.home_floor = 0;
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_home_outside_building() {
        let mut config = test_config(100);
        config.home_floor = 5;
        assert!(matches!(SimBuilder::new(config).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn rejects_empty_range() {
        let mut config = test_config(100);
        config.arrivals.patience = TickRange::new(50, 50);
        assert!(SimBuilder::new(config).build().is_err());
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use lift_model::{Action, Exit, Location};

    use super::*;
    use crate::{NoopObserver, SimBuilder, SimError, StepOutcome};

    #[test]
    fn single_rider_from_home_floor() {
        let mut sim = SimBuilder::new(test_config(5_000))
            .arrivals(script([rider(2, 4, 1_000, 10_000)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(
            rec.labels(),
            [
                "U1", "U2", "U3", "E3", "E4", "U5", "E4", "E5", "E6", "E7", "E7", "E2", "E3",
                "E4", "U6", "E4", "E5", "E6", "E8", "E8", "E2", "E3", "E4", "E5", "E6", "E1",
                "E9",
            ]
        );
        assert_eq!(rec.ticks_of("U5"), [Tick(40)]);
        assert_eq!(rec.ticks_of("U6"), [Tick(236)]);
        assert_eq!(rec.ticks_of("E1"), [Tick(568)]);
        assert_eq!(rec.ticks_of("E9"), [Tick(772)]);
        assert_eq!(rec.ended, Some(Tick(10_000)));

        let stats = sim.stats();
        assert_eq!(stats.arrivals, 1);
        assert_eq!(stats.boarded, 1);
        assert_eq!(stats.alighted, 1);
        assert_eq!(stats.total_wait_ticks, 40);
        assert_eq!(sim.building.location(RiderId(0)).unwrap(), Location::Left(Exit::Alighted));
        assert_eq!(sim.building.elevator.floor, 2);
        assert!(sim.building.elevator.is_dormant());
        assert!(!sim.building.elevator.any_call());
    }

    #[test]
    fn trace_reports_state_after_the_step() {
        let mut sim = SimBuilder::new(test_config(5_000))
            .arrivals(script([rider(2, 4, 1_000, 10_000)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let first_move = rec.records.iter().find(|r| r.label == "E7").unwrap();
        assert_eq!(first_move.tick, Tick(100));
        assert_eq!(first_move.floor, 3);
        assert_eq!(first_move.direction.symbol(), 'U');
        assert_eq!(first_move.text, "Elevator moving up to floor 3.");

        let opened = rec.records.iter().find(|r| r.label == "E3").unwrap();
        assert!(opened.doors_transitioning && opened.active && !opened.doors_idle_open);
    }

    #[test]
    fn rider_gives_up_at_patience_deadline() {
        // A (2→0) wakes the car at home.  B arrives upstairs at t10 with
        // patience 100; the car leaves downwards at t95 and B walks away at
        // t110 exactly.
        let mut sim = SimBuilder::new(test_config(2_000))
            .arrivals(script([rider(2, 0, 1_000, 10), rider(4, 1, 100, 100_000)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let b = RiderId(1);
        assert_eq!(sim.building.location(b).unwrap(), Location::Left(Exit::GaveUp));
        assert_eq!(sim.building.riders.boarded_at[b.index()], None);
        assert_eq!(sim.stats().gave_up, 1);

        let gave_up: Vec<_> = rec.records.iter().filter(|r| r.label == "U4").collect();
        assert_eq!(gave_up.len(), 1);
        assert_eq!(gave_up[0].tick, Tick(110));
        assert_eq!(gave_up[0].text, "User 1 decides to give up, leaves the system.");
        assert!(!rec.records.iter().any(|r| r.label == "U5" && r.text.starts_with("User 1 ")));
    }

    #[test]
    fn arrival_during_door_close_reopens() {
        // E5 closes the doors at t65 and would hand over to E6 at t85.  A
        // second rider arrives on the same floor at t70 and catches them.
        let mut sim = SimBuilder::new(test_config(400))
            .arrivals(script([rider(2, 3, 1_000, 70), rider(2, 4, 1_000, 100_000)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        assert_eq!(sim.stats().door_reopens, 1);
        assert_eq!(rec.ticks_of("E3"), [Tick(20), Tick(70), Tick(246)]);
        let e6 = rec.ticks_of("E6");
        assert_eq!(e6[0], Tick(166));
        assert!(!e6.contains(&Tick(85)), "stale E6 must have been cancelled");

        let stop = rec.records.iter().find(|r| r.tick == Tick(70) && r.label == "U2").unwrap();
        assert_eq!(stop.text, "User 1 arrives at doors closing and stops them.");
        assert_eq!(sim.stats().boarded, 2);
    }

    #[test]
    fn car_call_cleared_once_after_alighting() {
        // Rider 0 rides 2→3.  A hall call at floor 4 (rider 1, t50) keeps the
        // car going up, so E2 at t165 leaves the car call set and E6 at t261
        // clears it.
        let mut sim = SimBuilder::new(test_config(300))
            .arrivals(script([rider(2, 3, 1_000, 50), rider(4, 0, 1_000, 100_000)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();

        let mut was_set = false;
        let mut cleared = Vec::new();
        let mut alighted_at = None;
        while sim.step(&mut rec).unwrap() == StepOutcome::Continue {
            let set = sim.building.elevator.call_car[3];
            if was_set && !set {
                let last = rec.records.last().unwrap();
                cleared.push((last.tick, last.label));
            }
            was_set = set;
            if alighted_at.is_none()
                && sim.building.location(RiderId(0)).unwrap() == Location::Left(Exit::Alighted)
            {
                alighted_at = Some(sim.now());
            }
        }

        assert_eq!(cleared, [(Tick(261), "E6")]);
        assert_eq!(alighted_at, Some(Tick(185)));
    }

    #[test]
    fn empty_agenda_aborts_the_run() {
        // After the only rider is served the car goes dormant; once E9 has
        // fired at t772 nothing is left to run.
        let mut sim = SimBuilder::new(test_config(100_000))
            .arrivals(script([rider(2, 4, 1_000, 50)]))
            .build()
            .unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::AgendaExhausted { at } if at == Tick(772)));
        assert!(sim.is_finished());
        assert_eq!(sim.step(&mut NoopObserver).unwrap(), StepOutcome::Finished);
    }

    #[test]
    fn exhaustion_reports_the_clock_without_ending_normally() {
        let mut sim = SimBuilder::new(test_config(100_000))
            .arrivals(script([rider(2, 4, 1_000, 50)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let err = sim.run(&mut rec).unwrap_err();
        assert!(matches!(err, SimError::AgendaExhausted { at } if at == sim.now()));
        assert_eq!(rec.ended, None);
        assert_eq!(rec.ticks_of("E9"), [sim.now()]);
    }

    #[test]
    fn departed_riders_keep_rows_but_hold_no_entries() {
        let mut sim = SimBuilder::new(test_config(2_000))
            .arrivals(script([rider(2, 0, 1_000, 10), rider(4, 1, 100, 100_000)]))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        assert_eq!(sim.building.riders.len(), 2);
        assert_eq!(sim.building.riders.present(), 0);
        assert_eq!(sim.handles.give_up.len(), 2);
        for slot in &sim.handles.give_up {
            assert!(!slot.is_pending(&sim.agenda));
        }
        assert!(sim.agenda().iter().all(|(_, action)| !matches!(action, Action::Rider(..))));
    }

    #[test]
    fn invalid_sample_fails_the_step() {
        let mut sim = SimBuilder::new(test_config(1_000))
            .arrivals(script([rider(3, 3, 100, 100)]))
            .build()
            .unwrap();
        assert!(matches!(sim.run(&mut NoopObserver), Err(SimError::Model(_))));
    }

    #[test]
    fn finished_sim_stays_finished() {
        let mut sim = SimBuilder::new(test_config(1))
            .arrivals(script([rider(0, 1, 100, 100)]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        // U1–U3 run at T0; the car's first move is due at T20.
        assert_eq!(rec.ended, Some(Tick(20)));
        assert_eq!(sim.step(&mut rec).unwrap(), StepOutcome::Finished);
        assert_eq!(sim.stats().arrivals, 1);
    }
}

// ── Random runs ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod random_tests {
    use lift_core::SimConfig;

    use super::*;
    use crate::{SimBuilder, StepOutcome};

    #[test]
    fn clock_is_monotonic_and_membership_holds() {
        for seed in [1, 2, 3] {
            let mut sim = SimBuilder::new(SimConfig::knuth(seed)).build().unwrap();
            let mut rec = Recorder::default();
            let mut last = Tick::ZERO;
            while sim.step(&mut rec).unwrap() == StepOutcome::Continue {
                assert!(sim.now() >= last);
                last = sim.now();
                sim.building.verify_membership().unwrap();
            }
            assert!(last < sim.config.max_tick);
            assert!(sim.stats().arrivals > 0);
        }
    }

    #[test]
    fn riders_never_target_their_own_floor() {
        let mut sim = SimBuilder::new(SimConfig::knuth(11)).build().unwrap();
        sim.run(&mut Recorder::default()).unwrap();
        let riders = &sim.building.riders;
        assert!(!riders.is_empty());
        for i in 0..riders.len() {
            assert_ne!(riders.origin[i], riders.destination[i]);
        }
    }

    #[test]
    fn same_seed_same_trace() {
        let run = |seed| {
            let mut sim = SimBuilder::new(SimConfig::knuth(seed)).build().unwrap();
            let mut rec = Recorder::default();
            sim.run(&mut rec).unwrap();
            rec.records
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn counters_balance() {
        let mut sim = SimBuilder::new(SimConfig::knuth(9)).build().unwrap();
        sim.run(&mut Recorder::default()).unwrap();
        let s = sim.stats();
        let present = sim.building.riders.present() as u64;
        assert_eq!(s.arrivals, s.alighted + s.gave_up + present);
        assert!(s.boarded >= s.alighted);
    }
}
