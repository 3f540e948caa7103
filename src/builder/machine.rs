//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, State, StateHistory};
use crate::machine::{Machine, StatefulMachine, Transition, TransitionOption, TransitionTable};
use tracing::debug;

/// Builder for constructing state machines with a fluent API.
///
/// The builder is an accumulator: `build` and `build_stateful` borrow it,
/// so it can produce any number of independent machines.
#[derive(Clone, Debug)]
pub struct StateMachineBuilder<S: State, E: Event> {
    table: TransitionTable<S, E>,
    initial: Option<S>,
    history_limit: usize,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            table: TransitionTable::new(),
            initial: None,
            history_limit: 0,
        }
    }

    /// Register a state. Registering the same state twice is a no-op.
    pub fn add_state(mut self, state: S) -> Self {
        self.table.add_state(state);
        self
    }

    /// Register several states at once.
    pub fn add_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        for state in states {
            self.table.add_state(state);
        }
        self
    }

    /// Set the initial state (required by `build_stateful`).
    ///
    /// Membership in the state set is checked at build time.
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add an unguarded transition with no hooks.
    ///
    /// Replaces any transition already registered for `(from, event)`.
    /// Neither state needs to be registered.
    pub fn add_transition(mut self, from: S, to: S, event: E) -> Self {
        self.insert(Transition::new(from, to, event));
        self
    }

    /// Add a transition configured by `options`, applied in order.
    pub fn add_transition_with<I>(mut self, from: S, to: S, event: E, options: I) -> Self
    where
        I: IntoIterator<Item = TransitionOption<S, E>>,
    {
        self.insert(Transition::new(from, to, event).with_options(options));
        self
    }

    fn insert(&mut self, transition: Transition<S, E>) {
        if let Some(replaced) = self.table.insert(transition) {
            debug!(
                from = %replaced.from.name(),
                event = %replaced.event.name(),
                "replaced existing transition"
            );
        }
    }

    /// Keep the last `limit` committed transitions in stateful machines.
    /// Zero (the default) disables recording.
    pub fn record_history(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build a stateless machine.
    ///
    /// Fails if no states were registered. Any initial state is ignored.
    pub fn build(&self) -> Result<Machine<S, E>, BuildError<S>> {
        if self.table.state_count() == 0 {
            return Err(BuildError::EmptyStateSet);
        }

        debug!(
            states = self.table.state_count(),
            transitions = self.table.transition_count(),
            "built state machine"
        );
        Ok(Machine::new(self.table.clone()))
    }

    /// Build a machine that tracks its own current state.
    ///
    /// Fails if no states were registered, no initial state was set, or the
    /// initial state is not registered.
    pub fn build_stateful(&self) -> Result<StatefulMachine<S, E>, BuildError<S>> {
        let machine = self.build()?;
        let initial = self.initial.clone().ok_or(BuildError::InitialStateNotSet)?;

        if !self.table.contains_state(&initial) {
            return Err(BuildError::InvalidInitialState { state: initial });
        }

        debug!(initial = %initial.name(), "seeded stateful machine");
        Ok(StatefulMachine::new(
            machine,
            initial,
            StateHistory::with_capacity(self.history_limit),
        ))
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
