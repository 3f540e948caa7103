//! Trigger-time errors.

use crate::core::{Event, State};
use thiserror::Error;

/// Why a trigger did not change state.
///
/// Both variants are recoverable: the machine is left exactly as it was
/// before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError<S: State, E: Event> {
    #[error("No transition from state {from:?} on event {event:?}")]
    NoTransition { from: S, event: E },

    #[error("Guard rejected transition from {from:?} to {to:?} on event {event:?}")]
    GuardRejected { from: S, to: S, event: E },
}

impl<S: State, E: Event> TransitionError<S, E> {
    /// The state the machine was in, and still is.
    pub fn from_state(&self) -> &S {
        match self {
            Self::NoTransition { from, .. } | Self::GuardRejected { from, .. } => from,
        }
    }

    pub fn event(&self) -> &E {
        match self {
            Self::NoTransition { event, .. } | Self::GuardRejected { event, .. } => event,
        }
    }

    pub fn is_guard_rejected(&self) -> bool {
        matches!(self, Self::GuardRejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_states_and_events() {
        let err: TransitionError<&str, &str> = TransitionError::NoTransition {
            from: "Closed",
            event: "Unlock",
        };
        assert_eq!(
            err.to_string(),
            "No transition from state \"Closed\" on event \"Unlock\""
        );

        let err: TransitionError<&str, &str> = TransitionError::GuardRejected {
            from: "Closed",
            to: "Locked",
            event: "Lock",
        };
        assert_eq!(
            err.to_string(),
            "Guard rejected transition from \"Closed\" to \"Locked\" on event \"Lock\""
        );
    }

    #[test]
    fn accessors_expose_context() {
        let err: TransitionError<u8, u8> = TransitionError::GuardRejected {
            from: 1,
            to: 2,
            event: 9,
        };
        assert_eq!(err.from_state(), &1);
        assert_eq!(err.event(), &9);
        assert!(err.is_guard_rejected());
    }
}
