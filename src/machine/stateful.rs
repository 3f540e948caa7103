//! Stateful machine: the machine owns its current state behind a lock.

use super::error::TransitionError;
use super::stateless::Machine;
use crate::core::{Context, Event, State, StateHistory, StateTransition};
use crate::diagram::DiagramFormat;
use chrono::Utc;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Cell<S, E> {
    current: S,
    history: StateHistory<S, E>,
}

/// State machine that tracks its own current state.
///
/// `trigger` holds the write lock for the whole evaluation: lookup, guard,
/// hooks and commit. A slow hook therefore stalls every other caller of
/// the same machine. Reads of the current state take the lock shared.
///
/// # Example
///
/// ```rust
/// use turnstile::builder::StateMachineBuilder;
/// use turnstile::core::Context;
///
/// let machine = StateMachineBuilder::new()
///     .add_state("Closed")
///     .add_state("Open")
///     .initial_state("Closed")
///     .add_transition("Closed", "Open", "Open")
///     .add_transition("Open", "Closed", "Close")
///     .build_stateful()
///     .unwrap();
///
/// let ctx = Context::new();
/// machine.trigger(&ctx, &"Open").unwrap();
/// assert_eq!(machine.current_state(), "Open");
/// ```
pub struct StatefulMachine<S: State, E: Event> {
    machine: Machine<S, E>,
    cell: RwLock<Cell<S, E>>,
}

impl<S: State, E: Event> StatefulMachine<S, E> {
    pub(crate) fn new(machine: Machine<S, E>, initial: S, history: StateHistory<S, E>) -> Self {
        Self {
            machine,
            cell: RwLock::new(Cell {
                current: initial,
                history,
            }),
        }
    }

    /// Fire `event` from the current state.
    ///
    /// On error the current state is unchanged.
    pub fn trigger(&self, ctx: &Context, event: &E) -> Result<(), TransitionError<S, E>> {
        let mut cell = self.write();
        let from = cell.current.clone();
        self.machine.evaluate(ctx, &from, event, |from, to| {
            cell.current = to.clone();
            cell.history.record(StateTransition {
                from: from.clone(),
                to: to.clone(),
                event: event.clone(),
                timestamp: Utc::now(),
            });
        })?;
        Ok(())
    }

    /// Whether `trigger` would succeed right now, without running hooks.
    pub fn can_trigger(&self, ctx: &Context, event: &E) -> bool {
        let cell = self.read();
        self.machine.can_trigger(ctx, &cell.current, event)
    }

    pub fn current_state(&self) -> S {
        self.read().current.clone()
    }

    /// Check if the machine is in a final state.
    pub fn is_final(&self) -> bool {
        self.read().current.is_final()
    }

    /// Snapshot of the recorded history. Empty unless the builder enabled
    /// history recording.
    pub fn history(&self) -> StateHistory<S, E> {
        self.read().history.clone()
    }

    /// The stateless view over the same table.
    pub fn machine(&self) -> &Machine<S, E> {
        &self.machine
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.machine.states()
    }

    pub fn transitions(&self) -> impl Iterator<Item = (&S, &E, &S)> {
        self.machine.transitions()
    }

    /// Render the table in `format`, highlighting the current state.
    pub fn diagram(&self, format: DiagramFormat) -> String {
        let current = self.current_state();
        self.machine.diagram(format, &current)
    }

    // A hook that panicked poisons the lock; the last committed state is
    // still valid, so keep serving it.
    fn read(&self) -> RwLockReadGuard<'_, Cell<S, E>> {
        self.cell.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cell<S, E>> {
        self.cell.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: State, E: Event> std::fmt::Debug for StatefulMachine<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatefulMachine")
            .field("current", &self.read().current)
            .field("machine", &self.machine)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateMachineBuilder;
    use crate::machine::{with_after, with_before, with_guard};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    type Name = &'static str;

    fn door(locked: Arc<AtomicBool>) -> StatefulMachine<Name, Name> {
        StateMachineBuilder::new()
            .add_state("Closed")
            .add_state("Open")
            .add_state("Locked")
            .initial_state("Closed")
            .add_transition("Closed", "Open", "Open")
            .add_transition("Open", "Closed", "Close")
            .add_transition_with(
                "Closed",
                "Locked",
                "Lock",
                [with_guard(move |_: &Context, _: &Name, _: &Name, _: &Name| {
                    !locked.load(Ordering::SeqCst)
                })],
            )
            .add_transition("Locked", "Closed", "Unlock")
            .record_history(16)
            .build_stateful()
            .unwrap()
    }

    #[test]
    fn trigger_moves_current_state() {
        let machine = door(Arc::new(AtomicBool::new(false)));
        let ctx = Context::new();

        machine.trigger(&ctx, &"Open").unwrap();
        assert_eq!(machine.current_state(), "Open");

        machine.trigger(&ctx, &"Close").unwrap();
        assert_eq!(machine.current_state(), "Closed");
    }

    #[test]
    fn failed_trigger_leaves_state_unchanged() {
        let locked = Arc::new(AtomicBool::new(true));
        let machine = door(Arc::clone(&locked));
        let ctx = Context::new();

        let err = machine.trigger(&ctx, &"Lock").unwrap_err();
        assert!(err.is_guard_rejected());
        assert_eq!(machine.current_state(), "Closed");

        let err = machine.trigger(&ctx, &"Unlock").unwrap_err();
        assert!(matches!(err, TransitionError::NoTransition { .. }));
        assert_eq!(machine.current_state(), "Closed");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn hooks_observe_state_around_commit() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let before_seen = Arc::clone(&seen);
        let after_seen = Arc::clone(&seen);
        let machine = StateMachineBuilder::new()
            .add_state("Stopped")
            .add_state("Playing")
            .initial_state("Stopped")
            .add_transition_with(
                "Stopped",
                "Playing",
                "Play",
                [
                    with_before(move |_: &Context, from: &Name, _: &Name, _: &Name| {
                        before_seen.lock().unwrap().push(*from);
                    }),
                    with_after(move |_: &Context, _: &Name, to: &Name, _: &Name| {
                        after_seen.lock().unwrap().push(*to);
                    }),
                ],
            )
            .build_stateful()
            .unwrap();

        machine.trigger(&Context::new(), &"Play").unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["Stopped", "Playing"]);
        assert_eq!(machine.current_state(), "Playing");
    }

    #[test]
    fn history_records_committed_transitions() {
        let machine = door(Arc::new(AtomicBool::new(false)));
        let ctx = Context::new();

        machine.trigger(&ctx, &"Lock").unwrap();
        machine.trigger(&ctx, &"Unlock").unwrap();
        let _ = machine.trigger(&ctx, &"Unlock");

        let history = machine.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec![&"Closed", &"Locked", &"Closed"]);
        assert_eq!(history.last().map(|t| t.event), Some("Unlock"));
    }

    #[test]
    fn can_trigger_does_not_move() {
        let machine = door(Arc::new(AtomicBool::new(false)));
        let ctx = Context::new();

        assert!(machine.can_trigger(&ctx, &"Open"));
        assert!(!machine.can_trigger(&ctx, &"Close"));
        assert_eq!(machine.current_state(), "Closed");
    }

    #[test]
    fn poisoned_lock_keeps_last_committed_state() {
        let machine = Arc::new(
            StateMachineBuilder::new()
                .add_state("Idle")
                .add_state("Busy")
                .initial_state("Idle")
                .add_transition_with(
                    "Idle",
                    "Busy",
                    "Start",
                    [with_after(|_: &Context, _: &Name, _: &Name, _: &Name| {
                        panic!("hook failure");
                    })],
                )
                .build_stateful()
                .unwrap(),
        );

        let worker = Arc::clone(&machine);
        let outcome = std::thread::spawn(move || worker.trigger(&Context::new(), &"Start")).join();

        assert!(outcome.is_err());
        assert_eq!(machine.current_state(), "Busy");
        assert!(!machine.can_trigger(&Context::new(), &"Start"));
    }
}
