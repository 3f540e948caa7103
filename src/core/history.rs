//! State transition history tracking.
//!
//! A stateful machine can keep a bounded log of the transitions it has
//! committed. The log is in-memory only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "Closed",
///     to: "Open",
///     event: "Open",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "Open");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, E> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The event that caused the transition
    pub event: E,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions, oldest first.
///
/// A history has an optional capacity. Once full, recording a transition
/// evicts the oldest one.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition { from: 1u8, to: 2u8, event: 0u8, timestamp: Utc::now() });
/// history.record(StateTransition { from: 2u8, to: 3u8, event: 0u8, timestamp: Utc::now() });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&1, &2, &3]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, E> {
    transitions: VecDeque<StateTransition<S, E>>,
    capacity: Option<usize>,
}

impl<S, E> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> StateHistory<S, E> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create a new empty history keeping at most `capacity` transitions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append a transition, evicting the oldest one if the history is full.
    pub fn record(&mut self, transition: StateTransition<S, E>) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.transitions.len() >= capacity {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition followed
    /// by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Duration between the oldest and newest retained transitions.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Iterate transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition<S, E>> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Name = &'static str;

    fn transition(from: Name, to: Name) -> StateTransition<Name, Name> {
        StateTransition {
            from,
            to,
            event: "Go",
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<&str, &str> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(transition("Initial", "Processing"));
        history.record(transition("Processing", "Complete"));

        let path = history.get_path();
        assert_eq!(path, vec![&"Initial", &"Processing", &"Complete"]);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut history = StateHistory::with_capacity(2);
        history.record(transition("A", "B"));
        history.record(transition("B", "C"));
        history.record(transition("C", "D"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec![&"B", &"C", &"D"]);
        assert_eq!(history.last().map(|t| t.to), Some("D"));
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut history = StateHistory::with_capacity(0);
        history.record(transition("A", "B"));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let mut history = StateHistory::new();
        history.record(transition("Initial", "Processing"));

        std::thread::sleep(Duration::from_millis(10));

        history.record(transition("Processing", "Complete"));

        let duration = history.duration().unwrap();
        assert!(duration >= Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let mut history = StateHistory::new();
        history.record(transition("Initial", "Processing"));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history: StateHistory<String, String> = StateHistory::with_capacity(8);
        history.record(StateTransition {
            from: "Initial".to_string(),
            to: "Processing".to_string(),
            event: "Start".to_string(),
            timestamp: Utc::now(),
        });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<String, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.capacity(), Some(8));
        assert_eq!(deserialized.last(), history.last());
    }
}
