//! The transition table: registered states and `(state, event)` rules.

use super::transition::Transition;
use crate::core::{Event, State};
use std::collections::{HashMap, HashSet};

/// Mapping from state to event to transition, plus the registered states.
///
/// The table does not check that `from` and `to` of a transition are
/// registered states. Registering a second transition for a `(from, event)`
/// pair replaces the first.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, E: Event> {
    states: HashSet<S>,
    transitions: HashMap<S, HashMap<E, Transition<S, E>>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
            transitions: HashMap::new(),
        }
    }

    /// Register a state. Returns false if it was already registered.
    pub fn add_state(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Insert a transition keyed by its `(from, event)` pair, returning the
    /// transition it replaced, if any.
    pub fn insert(&mut self, transition: Transition<S, E>) -> Option<Transition<S, E>> {
        self.transitions
            .entry(transition.from.clone())
            .or_default()
            .insert(transition.event.clone(), transition)
    }

    pub fn get(&self, from: &S, event: &E) -> Option<&Transition<S, E>> {
        self.transitions.get(from)?.get(event)
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Registered states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    /// Every transition, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S, E>> {
        self.transitions.values().flat_map(HashMap::values)
    }

    /// Transitions leaving `from`.
    pub fn transitions_from<'a>(&'a self, from: &S) -> impl Iterator<Item = &'a Transition<S, E>> {
        self.transitions.get(from).into_iter().flat_map(HashMap::values)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
