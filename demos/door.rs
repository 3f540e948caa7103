//! Door
//!
//! A door that can be opened, closed and locked. Locking is guarded by a
//! flag shared with the guard closure.
//!
//! Key concepts:
//! - Stateful machine seeded with an initial state
//! - Guard reading external state at trigger time
//! - Diagram output in both notations
//!
//! Run with: cargo run --example door

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use turnstile::machine::with_guard;
use turnstile::{event_enum, state_enum};
use turnstile::{Context, DiagramFormat, StateMachineBuilder};

state_enum! {
    enum Door {
        Closed,
        Open,
        Locked,
    }
}

event_enum! {
    enum Action {
        Open,
        Close,
        Lock,
        Unlock,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Door ===\n");

    let key_missing = Arc::new(AtomicBool::new(true));
    let guard_flag = Arc::clone(&key_missing);

    let door = StateMachineBuilder::new()
        .add_states([Door::Closed, Door::Open, Door::Locked])
        .initial_state(Door::Closed)
        .add_transition(Door::Closed, Door::Open, Action::Open)
        .add_transition(Door::Open, Door::Closed, Action::Close)
        .add_transition_with(
            Door::Closed,
            Door::Locked,
            Action::Lock,
            [with_guard(move |_: &Context, _: &Door, _: &Door, _: &Action| {
                !guard_flag.load(Ordering::SeqCst)
            })],
        )
        .add_transition(Door::Locked, Door::Closed, Action::Unlock)
        .build_stateful()
        .unwrap();

    let ctx = Context::new();
    println!("Initial state: {}", door.current_state());

    for action in [Action::Open, Action::Lock, Action::Close, Action::Lock] {
        match door.trigger(&ctx, &action) {
            Ok(()) => println!("  {action}: now {}", door.current_state()),
            Err(e) => println!("  {action}: {e}"),
        }
    }

    println!("\nFound the key.");
    key_missing.store(false, Ordering::SeqCst);
    door.trigger(&ctx, &Action::Lock).unwrap();
    println!("  Lock: now {}", door.current_state());

    println!("\nMermaid:\n{}", door.diagram(DiagramFormat::Mermaid));
    println!("DOT:\n{}", door.diagram(DiagramFormat::Dot));
}
