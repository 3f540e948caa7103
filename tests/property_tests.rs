//! Property-based tests for table construction and trigger evaluation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated tables and event sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use turnstile::machine::{with_guard, TransitionError};
use turnstile::{BuildError, Context, StateMachineBuilder};

type Rule = (u8, u8, u8);

prop_compose! {
    fn arbitrary_rule()(from in 0..6u8, to in 0..6u8, event in 0..4u8) -> Rule {
        (from, to, event)
    }
}

fn builder_for(rules: &[Rule]) -> StateMachineBuilder<u8, u8> {
    rules.iter().fold(
        StateMachineBuilder::new().add_states(0..6u8),
        |builder, &(from, to, event)| builder.add_transition(from, to, event),
    )
}

/// Last registration for a `(from, event)` pair wins.
fn model(rules: &[Rule]) -> HashMap<(u8, u8), u8> {
    rules
        .iter()
        .map(|&(from, to, event)| ((from, event), to))
        .collect()
}

proptest! {
    #[test]
    fn trigger_follows_last_registered_rule(
        rules in prop::collection::vec(arbitrary_rule(), 0..24),
        state in 0..6u8,
        event in 0..4u8,
    ) {
        let machine = builder_for(&rules).build().unwrap();
        let expected = model(&rules);
        let result = machine.trigger(&Context::new(), &state, &event);

        match expected.get(&(state, event)) {
            Some(&to) => prop_assert_eq!(result, Ok(to)),
            None => prop_assert_eq!(
                result,
                Err(TransitionError::NoTransition { from: state, event })
            ),
        }
    }

    #[test]
    fn guard_outcome_decides_transition(allow in any::<bool>(), from in 0..6u8, to in 0..6u8) {
        let machine = StateMachineBuilder::new()
            .add_states(0..6u8)
            .add_transition_with(
                from,
                to,
                0u8,
                [with_guard(move |_: &Context, _: &u8, _: &u8, _: &u8| allow)],
            )
            .build()
            .unwrap();

        let result = machine.trigger(&Context::new(), &from, &0);

        if allow {
            prop_assert_eq!(result, Ok(to));
        } else {
            prop_assert_eq!(result, Err(TransitionError::GuardRejected { from, to, event: 0 }));
        }
    }

    #[test]
    fn build_succeeds_iff_states_registered(states in prop::collection::vec(0..6u8, 0..4)) {
        let result = StateMachineBuilder::<u8, u8>::new()
            .add_states(states.clone())
            .build();

        prop_assert_eq!(result.is_ok(), !states.is_empty());
    }

    #[test]
    fn stateful_build_validates_initial_state(
        states in prop::collection::vec(0..6u8, 1..4),
        initial in 0..6u8,
    ) {
        let result = StateMachineBuilder::<u8, u8>::new()
            .add_states(states.clone())
            .initial_state(initial)
            .build_stateful();

        let registered: HashSet<u8> = states.into_iter().collect();
        if registered.contains(&initial) {
            prop_assert_eq!(result.map(|machine| machine.current_state()).ok(), Some(initial));
        } else {
            prop_assert_eq!(result.err(), Some(BuildError::InvalidInitialState { state: initial }));
        }
    }

    #[test]
    fn stateful_machine_matches_model(
        rules in prop::collection::vec(arbitrary_rule(), 0..24),
        events in prop::collection::vec(0..4u8, 0..16),
    ) {
        let machine = builder_for(&rules)
            .initial_state(0)
            .record_history(64)
            .build_stateful()
            .unwrap();
        let expected = model(&rules);
        let ctx = Context::new();

        let mut current = 0u8;
        let mut committed = 0usize;
        for event in events {
            let result = machine.trigger(&ctx, &event);
            match expected.get(&(current, event)) {
                Some(&to) => {
                    prop_assert!(result.is_ok());
                    current = to;
                    committed += 1;
                }
                None => prop_assert!(result.is_err()),
            }
            prop_assert_eq!(machine.current_state(), current);
        }

        prop_assert_eq!(machine.history().len(), committed);
    }

    #[test]
    fn diagram_is_deterministic(
        rules in prop::collection::vec(arbitrary_rule(), 0..24),
        current in 0..6u8,
    ) {
        let builder = builder_for(&rules);
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        for format in [turnstile::DiagramFormat::Mermaid, turnstile::DiagramFormat::Dot] {
            prop_assert_eq!(first.diagram(format, &current), second.diagram(format, &current));
        }
    }
}
