//! Music Player
//!
//! A player that keeps its own current state and drives a stateless
//! machine, passing the state in on every trigger.
//!
//! Run with: cargo run --example music_player

use tracing_subscriber::EnvFilter;
use turnstile::machine::with_before;
use turnstile::{event_enum, state_enum};
use turnstile::{Context, DiagramFormat, Machine, StateMachineBuilder, TransitionError};

state_enum! {
    enum PlayerState {
        Stopped,
        Playing,
        Paused,
    }
}

event_enum! {
    enum PlayerEvent {
        Play,
        Pause,
        Stop,
    }
}

struct MusicPlayer {
    machine: Machine<PlayerState, PlayerEvent>,
    current: PlayerState,
}

impl MusicPlayer {
    fn new() -> Self {
        let announce = |_: &Context, from: &PlayerState, to: &PlayerState, event: &PlayerEvent| {
            println!("  [{event}] {from} -> {to}");
        };

        let machine = [
            (PlayerState::Stopped, PlayerState::Playing, PlayerEvent::Play),
            (PlayerState::Playing, PlayerState::Paused, PlayerEvent::Pause),
            (PlayerState::Paused, PlayerState::Playing, PlayerEvent::Play),
            (PlayerState::Playing, PlayerState::Stopped, PlayerEvent::Stop),
            (PlayerState::Paused, PlayerState::Stopped, PlayerEvent::Stop),
        ]
        .into_iter()
        .fold(
            StateMachineBuilder::new().add_states([
                PlayerState::Stopped,
                PlayerState::Playing,
                PlayerState::Paused,
            ]),
            |builder, (from, to, event)| {
                builder.add_transition_with(from, to, event, [with_before(announce)])
            },
        )
        .build()
        .unwrap();

        Self {
            machine,
            current: PlayerState::Stopped,
        }
    }

    fn trigger(
        &mut self,
        event: PlayerEvent,
    ) -> Result<(), TransitionError<PlayerState, PlayerEvent>> {
        self.current = self.machine.trigger(&Context::new(), &self.current, &event)?;
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Music Player ===\n");

    let mut player = MusicPlayer::new();
    println!("Initial state: {}", player.current);

    for event in [
        PlayerEvent::Play,
        PlayerEvent::Pause,
        PlayerEvent::Pause,
        PlayerEvent::Play,
        PlayerEvent::Stop,
    ] {
        match player.trigger(event) {
            Ok(()) => println!("Action: {event}, New state: {}", player.current),
            Err(e) => println!("Error: {e}"),
        }
    }

    println!("\nDiagram:");
    println!(
        "{}",
        player.machine.diagram(DiagramFormat::Mermaid, &PlayerState::Stopped)
    );
}
