//! Transition descriptors and the options that configure them.

use crate::core::{Context, Event, Guard, Hook, State};

/// A configured rule mapping `(from, event)` to a target state.
///
/// At most one transition exists per `(from, event)` pair in a table.
#[derive(Clone, Debug)]
pub struct Transition<S: State, E: Event> {
    pub from: S,
    pub to: S,
    pub event: E,
    pub guard: Option<Guard<S, E>>,
    pub before: Option<Hook<S, E>>,
    pub after: Option<Hook<S, E>>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// An unguarded transition with no hooks.
    pub fn new(from: S, to: S, event: E) -> Self {
        Self {
            from,
            to,
            event,
            guard: None,
            before: None,
            after: None,
        }
    }

    /// Apply options in order. A later option of the same kind replaces an
    /// earlier one.
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = TransitionOption<S, E>>,
    {
        for option in options {
            self.apply(option);
        }
        self
    }

    pub fn apply(&mut self, option: TransitionOption<S, E>) {
        match option {
            TransitionOption::Guard(guard) => self.guard = Some(guard),
            TransitionOption::Before(hook) => self.before = Some(hook),
            TransitionOption::After(hook) => self.after = Some(hook),
        }
    }

    /// Evaluate the guard for a trigger of `event` from `from`. Unguarded
    /// transitions always pass.
    pub fn allows(&self, ctx: &Context, from: &S, event: &E) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|guard| guard.check(ctx, from, &self.to, event))
    }

    pub(crate) fn run_before(&self, ctx: &Context, from: &S, event: &E) {
        if let Some(before) = &self.before {
            before.call(ctx, from, &self.to, event);
        }
    }

    pub(crate) fn run_after(&self, ctx: &Context, from: &S, event: &E) {
        if let Some(after) = &self.after {
            after.call(ctx, from, &self.to, event);
        }
    }
}

/// One configuration knob attached to a transition at registration time.
pub enum TransitionOption<S: State, E: Event> {
    Guard(Guard<S, E>),
    Before(Hook<S, E>),
    After(Hook<S, E>),
}

impl<S: State, E: Event> From<Guard<S, E>> for TransitionOption<S, E> {
    fn from(guard: Guard<S, E>) -> Self {
        Self::Guard(guard)
    }
}

/// Block the transition unless `predicate` returns true.
pub fn with_guard<S, E, F>(predicate: F) -> TransitionOption<S, E>
where
    S: State,
    E: Event,
    F: Fn(&Context, &S, &S, &E) -> bool + Send + Sync + 'static,
{
    TransitionOption::Guard(Guard::new(predicate))
}

/// Run `callback` after the guard passes and before the state changes.
pub fn with_before<S, E, F>(callback: F) -> TransitionOption<S, E>
where
    S: State,
    E: Event,
    F: Fn(&Context, &S, &S, &E) + Send + Sync + 'static,
{
    TransitionOption::Before(Hook::new(callback))
}

/// Run `callback` after the state has changed.
pub fn with_after<S, E, F>(callback: F) -> TransitionOption<S, E>
where
    S: State,
    E: Event,
    F: Fn(&Context, &S, &S, &E) + Send + Sync + 'static,
{
    TransitionOption::After(Hook::new(callback))
}
