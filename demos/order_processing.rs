//! Order Processing
//!
//! An e-commerce order lifecycle with a payment guard, transition hooks
//! and per-event callbacks.
//!
//! Key concepts:
//! - Guard enforcing a minimum payment
//! - Hooks around the commit
//! - Event values carrying their own callbacks
//! - Bounded history exported as JSON
//!
//! Run with: cargo run --example order_processing

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use turnstile::machine::{with_after, with_guard};
use turnstile::{event_enum, state_enum};
use turnstile::{Context, Hooked, StateMachineBuilder, StatefulMachine};

state_enum! {
    enum OrderState {
        Created,
        PaymentPending,
        Paid,
        Shipped,
        Delivered,
        Cancelled,
    }
    final: [Delivered, Cancelled]
}

event_enum! {
    enum OrderEvent {
        Checkout,
        ConfirmPayment,
        Ship,
        Deliver,
        Cancel,
    }
}

const ORDER_TOTAL_CENTS: u64 = 14_999;

type OrderMachine = StatefulMachine<OrderState, Hooked<OrderEvent>>;

fn order_machine(received: Arc<AtomicU64>) -> OrderMachine {
    let notify = |_: &Context, _: &OrderState, to: &OrderState, event: &Hooked<OrderEvent>| {
        println!("  [Notification] {} -> order is now {to}", event.kind());
    };

    StateMachineBuilder::<OrderState, Hooked<OrderEvent>>::new()
        .add_states([
            OrderState::Created,
            OrderState::PaymentPending,
            OrderState::Paid,
            OrderState::Shipped,
            OrderState::Delivered,
            OrderState::Cancelled,
        ])
        .initial_state(OrderState::Created)
        .record_history(16)
        .add_transition(
            OrderState::Created,
            OrderState::PaymentPending,
            OrderEvent::Checkout.into(),
        )
        .add_transition_with(
            OrderState::PaymentPending,
            OrderState::Paid,
            OrderEvent::ConfirmPayment.into(),
            [
                with_guard(
                    move |_: &Context, _: &OrderState, _: &OrderState, _: &Hooked<OrderEvent>| {
                        received.load(Ordering::SeqCst) >= ORDER_TOTAL_CENTS
                    },
                ),
                with_after(notify),
            ],
        )
        .add_transition_with(
            OrderState::Paid,
            OrderState::Shipped,
            OrderEvent::Ship.into(),
            [with_after(notify)],
        )
        .add_transition_with(
            OrderState::Shipped,
            OrderState::Delivered,
            OrderEvent::Deliver.into(),
            [with_after(notify)],
        )
        .add_transition(
            OrderState::Created,
            OrderState::Cancelled,
            OrderEvent::Cancel.into(),
        )
        .add_transition(
            OrderState::PaymentPending,
            OrderState::Cancelled,
            OrderEvent::Cancel.into(),
        )
        .build_stateful()
        .unwrap()
}

fn step(order: &OrderMachine, ctx: &Context, event: Hooked<OrderEvent>) {
    let name = *event.kind();
    match order.trigger(ctx, &event) {
        Ok(()) => println!("{name}: {}", order.current_state()),
        Err(e) => println!("{name} failed: {e}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== E-commerce Order Processing ===\n");

    let received = Arc::new(AtomicU64::new(0));
    let order = order_machine(Arc::clone(&received));
    let ctx = Context::new();

    println!("Total: ${:.2}\n", ORDER_TOTAL_CENTS as f64 / 100.0);

    step(&order, &ctx, OrderEvent::Checkout.into());

    received.store(10_000, Ordering::SeqCst);
    step(&order, &ctx, OrderEvent::ConfirmPayment.into());

    let top_up = Arc::clone(&received);
    let payment = Hooked::new(OrderEvent::ConfirmPayment)
        .before(move |_: &Context| println!("  [Payment] capturing remaining balance"))
        .after(move |_: &Context| {
            println!(
                "  [Payment] received ${:.2}",
                top_up.load(Ordering::SeqCst) as f64 / 100.0
            )
        });
    received.store(ORDER_TOTAL_CENTS, Ordering::SeqCst);
    step(&order, &ctx, payment);

    step(&order, &ctx, OrderEvent::Ship.into());
    step(&order, &ctx, OrderEvent::Deliver.into());
    step(&order, &ctx, OrderEvent::Cancel.into());

    println!("\nFinal: {}", order.is_final());

    let history = order.history();
    let path: Vec<String> = history.get_path().iter().map(|s| s.to_string()).collect();
    println!("Path: {}", path.join(" -> "));
    if let Some(elapsed) = history.duration() {
        println!("Elapsed: {elapsed:?}");
    }

    let transitions: Vec<_> = history
        .transitions()
        .map(|t| {
            serde_json::json!({
                "from": t.from.to_string(),
                "to": t.to.to_string(),
                "event": t.event.kind().to_string(),
                "timestamp": t.timestamp,
            })
        })
        .collect();
    match serde_json::to_string_pretty(&transitions) {
        Ok(json) => println!("\nHistory:\n{json}"),
        Err(e) => println!("\nHistory unavailable: {e}"),
    }
}
