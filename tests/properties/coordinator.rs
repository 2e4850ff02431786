//! Property tests for the debounce/generation state machine.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use depwatch::application::watch::{Coordinator, EventClass, Generation, LoopState, Transition};
use depwatch::domain::value_objects::CancelToken;

#[derive(Debug, Clone)]
enum Step {
    Write(u64),
    Noise(u64),
    Tick(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u64..80).prop_map(Step::Write),
        (0u64..80).prop_map(Step::Noise),
        (0u64..250).prop_map(Step::Tick),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Generation ids grow by one per trigger and only the newest
    /// generation's scope is still live.
    #[test]
    fn property_only_newest_generation_is_live(steps in proptest::collection::vec(step(), 0..64)) {
        let root = CancelToken::new();
        let debounce = Duration::from_millis(100);
        let mut coordinator = Coordinator::new(root.clone(), debounce);
        let mut now = Instant::now();
        let mut generations: Vec<Generation> = vec![coordinator.current().clone()];
        let write = EventClass::Write(PathBuf::from("/p/main.toit"));

        for step in steps {
            match step {
                Step::Write(gap) => {
                    now += Duration::from_millis(gap);
                    let was_idle = coordinator.state() == LoopState::Idle;
                    match coordinator.on_event(&write, now) {
                        Transition::Triggered(generation) => {
                            prop_assert!(was_idle);
                            let last = generations.last().unwrap().id();
                            prop_assert_eq!(generation.id(), last + 1);
                            generations.push(generation);
                        }
                        Transition::Coalesced => prop_assert!(!was_idle),
                        other => prop_assert!(false, "unexpected transition {:?}", other),
                    }
                }
                Step::Noise(gap) => {
                    now += Duration::from_millis(gap);
                    let before = coordinator.state();
                    prop_assert!(matches!(coordinator.on_event(&EventClass::Noise, now), Transition::Ignored));
                    prop_assert_eq!(coordinator.state(), before);
                }
                Step::Tick(gap) => {
                    now += Duration::from_millis(gap);
                    coordinator.on_tick(now);
                    if let Some(deadline) = coordinator.deadline() {
                        prop_assert!(deadline > now);
                    }
                }
            }

            let (latest, older) = generations.split_last().unwrap();
            prop_assert!(!latest.scope().is_cancelled());
            prop_assert!(older.iter().all(|g| g.scope().is_cancelled()));
            prop_assert_eq!(coordinator.current().id(), latest.id());
        }

        coordinator.shutdown();
        prop_assert!(generations.iter().all(|g| g.scope().is_cancelled()));
        prop_assert!(!root.is_cancelled());
    }
}
