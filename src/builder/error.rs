//! Build errors for the state machine builder.

use crate::core::State;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<S: State> {
    #[error("No states defined. Call .add_state(state) before .build()")]
    EmptyStateSet,

    #[error("Initial state not specified. Call .initial_state(state) before .build_stateful()")]
    InitialStateNotSet,

    #[error("Initial state {state:?} is not a registered state")]
    InvalidInitialState { state: S },
}
