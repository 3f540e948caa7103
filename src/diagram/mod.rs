//! Textual diagrams of a transition table.
//!
//! Two notations are supported: Mermaid state diagrams and Graphviz DOT.
//! Output is deterministic: states are sorted by name and transitions by
//! `(from, to, event)` names, so the text can be diffed against stored
//! reference files.

mod dot;
mod mermaid;

use crate::core::{Event, State};
use crate::machine::TransitionTable;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use dot::Dot;
pub use mermaid::Mermaid;

/// Errors raised while selecting a diagram notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagramError {
    #[error("Unsupported diagram format '{0}'. Expected 'mermaid' or 'dot'")]
    UnsupportedFormat(String),
}

/// Output notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramFormat {
    Mermaid,
    Dot,
}

impl DiagramFormat {
    pub fn renderer(self) -> &'static dyn DiagramRenderer {
        match self {
            Self::Mermaid => &Mermaid,
            Self::Dot => &Dot,
        }
    }
}

impl FromStr for DiagramFormat {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mermaid" => Ok(Self::Mermaid),
            "dot" | "graphviz" => Ok(Self::Dot),
            _ => Err(DiagramError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DiagramFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mermaid => f.write_str("mermaid"),
            Self::Dot => f.write_str("dot"),
        }
    }
}

/// One rendered edge, compared by `(from, to, event)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub event: String,
}

/// Name-level view of a table, already in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub states: BTreeSet<String>,
    pub edges: Vec<Edge>,
    pub current: String,
}

impl Snapshot {
    pub fn new<S: State, E: Event>(table: &TransitionTable<S, E>, current: &S) -> Self {
        let states = table.states().map(|state| state.name().into_owned()).collect();

        let mut edges: Vec<Edge> = table
            .transitions()
            .map(|transition| Edge {
                from: transition.from.name().into_owned(),
                to: transition.to.name().into_owned(),
                event: transition.event.name().into_owned(),
            })
            .collect();
        edges.sort();

        Self {
            states,
            edges,
            current: current.name().into_owned(),
        }
    }
}

/// A diagram notation.
pub trait DiagramRenderer: Send + Sync {
    fn render(&self, snapshot: &Snapshot) -> String;
}

/// Render `table` in `format`, marking `current`.
pub fn render<S: State, E: Event>(
    format: DiagramFormat,
    table: &TransitionTable<S, E>,
    current: &S,
) -> String {
    format.renderer().render(&Snapshot::new(table, current))
}
