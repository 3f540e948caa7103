//! Guard predicates and transition hooks.
//!
//! Guards decide whether a transition may proceed. Hooks are side effects
//! run immediately before and after a transition commits. Both receive the
//! execution context, the source state, the target state and the event.

use super::context::Context;
use super::event::Event;
use super::state::State;
use std::fmt;
use std::sync::Arc;

type Predicate<S, E> = dyn Fn(&Context, &S, &S, &E) -> bool + Send + Sync;
type Callback<S, E> = dyn Fn(&Context, &S, &S, &E) + Send + Sync;

/// Predicate that determines if a transition can execute.
///
/// Guards should be pure; the machine may evaluate them without running
/// the transition (see `Machine::can_trigger`).
///
/// # Example
///
/// ```rust
/// use turnstile::core::{Context, Guard};
///
/// let only_from_closed = Guard::<&str, &str>::new(|_ctx, from, _to, _event| *from == "Closed");
///
/// let ctx = Context::new();
/// assert!(only_from_closed.check(&ctx, &"Closed", &"Locked", &"Lock"));
/// assert!(!only_from_closed.check(&ctx, &"Open", &"Locked", &"Lock"));
/// ```
pub struct Guard<S: State, E: Event> {
    predicate: Arc<Predicate<S, E>>,
}

impl<S: State, E: Event> Guard<S, E> {
    /// Create a guard from a predicate over `(context, from, to, event)`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Context, &S, &S, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition.
    pub fn check(&self, ctx: &Context, from: &S, to: &S, event: &E) -> bool {
        (self.predicate)(ctx, from, to, event)
    }
}

impl<S: State, E: Event> Clone for Guard<S, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for Guard<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

/// Side effect attached to a transition.
///
/// Hooks have no failure channel. A hook that panics unwinds straight
/// through the machine to the caller.
pub struct Hook<S: State, E: Event> {
    callback: Arc<Callback<S, E>>,
}

impl<S: State, E: Event> Hook<S, E> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Context, &S, &S, &E) + Send + Sync + 'static,
    {
        Hook {
            callback: Arc::new(callback),
        }
    }

    pub fn call(&self, ctx: &Context, from: &S, to: &S, event: &E) {
        (self.callback)(ctx, from, to, event)
    }
}

impl<S: State, E: Event> Clone for Hook<S, E> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for Hook<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}
