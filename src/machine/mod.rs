//! Transition table and the trigger engine.
//!
//! # Key Concepts
//!
//! - **Transitions**: `(from, event) -> to` rules with an optional guard and
//!   before/after hooks
//! - **Machine**: stateless engine; the caller passes the current state
//! - **StatefulMachine**: owns its current state behind a read/write lock
//!
//! Both engines share one evaluation path: lookup, guard, before hooks,
//! commit, after hooks.

mod error;
mod stateful;
mod stateless;
mod table;
mod transition;

pub use error::TransitionError;
pub use stateful::StatefulMachine;
pub use stateless::Machine;
pub use table::TransitionTable;
pub use transition::{with_after, with_before, with_guard, Transition, TransitionOption};
