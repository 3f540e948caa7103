//! Stateless machine: the caller supplies the current state on every call.

use super::error::TransitionError;
use super::table::TransitionTable;
use crate::core::{Context, Event, State};
use crate::diagram::{self, DiagramFormat};
use std::sync::Arc;
use tracing::{debug, trace};

/// Immutable state machine over a frozen transition table.
///
/// A `Machine` holds no current state, so it can be shared freely between
/// threads: every trigger is a function of its arguments and the table.
///
/// # Example
///
/// ```rust
/// use turnstile::builder::StateMachineBuilder;
/// use turnstile::core::Context;
///
/// let machine = StateMachineBuilder::new()
///     .add_state("Stopped")
///     .add_state("Playing")
///     .add_transition("Stopped", "Playing", "Play")
///     .build()
///     .unwrap();
///
/// let ctx = Context::new();
/// assert_eq!(machine.trigger(&ctx, &"Stopped", &"Play"), Ok("Playing"));
/// assert!(machine.trigger(&ctx, &"Playing", &"Play").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Machine<S: State, E: Event> {
    table: Arc<TransitionTable<S, E>>,
}

impl<S: State, E: Event> Machine<S, E> {
    pub(crate) fn new(table: TransitionTable<S, E>) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Fire `event` from `current`, returning the target state.
    ///
    /// On error nothing has run beyond the guard, and no hooks were called.
    pub fn trigger(
        &self,
        ctx: &Context,
        current: &S,
        event: &E,
    ) -> Result<S, TransitionError<S, E>> {
        self.evaluate(ctx, current, event, |_, _| {})
    }

    /// Whether `trigger` would succeed, without running any hooks.
    pub fn can_trigger(&self, ctx: &Context, current: &S, event: &E) -> bool {
        self.table
            .get(current, event)
            .is_some_and(|transition| transition.allows(ctx, current, event))
    }

    /// The single evaluation path shared by both machine modes:
    /// lookup, guard, before hooks, commit, after hooks.
    ///
    /// `commit` receives `(from, to)` and is the only place a caller may
    /// mutate its own state.
    pub(crate) fn evaluate<F>(
        &self,
        ctx: &Context,
        current: &S,
        event: &E,
        commit: F,
    ) -> Result<S, TransitionError<S, E>>
    where
        F: FnOnce(&S, &S),
    {
        let Some(transition) = self.table.get(current, event) else {
            debug!(from = %current.name(), event = %event.name(), "no transition");
            return Err(TransitionError::NoTransition {
                from: current.clone(),
                event: event.clone(),
            });
        };

        if !transition.allows(ctx, current, event) {
            debug!(
                from = %current.name(),
                to = %transition.to.name(),
                event = %event.name(),
                "guard rejected transition"
            );
            return Err(TransitionError::GuardRejected {
                from: current.clone(),
                to: transition.to.clone(),
                event: event.clone(),
            });
        }

        let event_hooks = event.hooks();

        transition.run_before(ctx, current, event);
        if let Some(hooks) = event_hooks.filter(|hooks| hooks.has_before()) {
            trace!(event = %event.name(), "running event before hook");
            hooks.run_before(ctx);
        }

        let target = transition.to.clone();
        commit(current, &target);

        transition.run_after(ctx, current, event);
        if let Some(hooks) = event_hooks.filter(|hooks| hooks.has_after()) {
            trace!(event = %event.name(), "running event after hook");
            hooks.run_after(ctx);
        }

        debug!(
            from = %current.name(),
            to = %target.name(),
            event = %event.name(),
            "transition committed"
        );
        Ok(target)
    }

    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// Registered states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.table.states()
    }

    /// Every `(from, event, to)` triple in the table, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &E, &S)> {
        self.table
            .transitions()
            .map(|transition| (&transition.from, &transition.event, &transition.to))
    }

    /// Render the table in `format`, highlighting `current`.
    pub fn diagram(&self, format: DiagramFormat, current: &S) -> String {
        diagram::render(format, &self.table, current)
    }
}
