//! Core state machine types.
//!
//! This module contains the caller-facing vocabulary of the machine:
//! - State and event definitions via the `State` and `Event` traits
//! - Per-instance event callbacks (`EventHooks`, `Hooked`)
//! - Guard predicates and transition hooks
//! - The execution context forwarded to guards and hooks
//! - Bounded transition history

mod context;
mod event;
mod guard;
mod history;
mod state;

pub use context::Context;
pub use event::{Event, EventHooks, Hooked};
pub use guard::{Guard, Hook};
pub use history::{StateHistory, StateTransition};
pub use state::State;
