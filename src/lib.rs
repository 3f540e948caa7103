//! Turnstile: a generic finite state machine.
//!
//! Callers own their states and events. Turnstile validates a transition
//! table once, then evaluates events against it: look up the `(state, event)`
//! pair, check the guard, run before hooks, commit, run after hooks.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: caller-supplied, hashable values
//! - **Guards**: predicates that can block a transition
//! - **Hooks**: side effects around the commit, on the transition or
//!   carried by an individual event value
//! - **Machine**: stateless engine, current state passed on each call
//! - **StatefulMachine**: owns its current state behind a read/write lock
//!
//! # Example
//!
//! ```rust
//! use turnstile::builder::StateMachineBuilder;
//! use turnstile::core::Context;
//! use turnstile::machine::{with_guard, TransitionError};
//! use turnstile::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!         Locked,
//!     }
//! }
//!
//! event_enum! {
//!     enum Action {
//!         Open,
//!         Close,
//!         Lock,
//!         Unlock,
//!     }
//! }
//!
//! let machine = StateMachineBuilder::new()
//!     .add_states([Door::Closed, Door::Open, Door::Locked])
//!     .initial_state(Door::Closed)
//!     .add_transition(Door::Closed, Door::Open, Action::Open)
//!     .add_transition(Door::Open, Door::Closed, Action::Close)
//!     .add_transition_with(
//!         Door::Closed,
//!         Door::Locked,
//!         Action::Lock,
//!         [with_guard(|ctx: &Context, _: &Door, _: &Door, _: &Action| !ctx.is_cancelled())],
//!     )
//!     .add_transition(Door::Locked, Door::Closed, Action::Unlock)
//!     .build_stateful()
//!     .unwrap();
//!
//! let ctx = Context::new();
//! machine.trigger(&ctx, &Action::Lock).unwrap();
//! assert_eq!(machine.current_state(), Door::Locked);
//!
//! let err = machine.trigger(&ctx, &Action::Open).unwrap_err();
//! assert!(matches!(err, TransitionError::NoTransition { .. }));
//! assert_eq!(machine.current_state(), Door::Locked);
//! ```

pub mod builder;
pub mod core;
pub mod diagram;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Context, Event, EventHooks, Guard, Hook, Hooked, State};
pub use crate::diagram::DiagramFormat;
pub use crate::machine::{Machine, StatefulMachine, TransitionError};
