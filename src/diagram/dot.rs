use super::{DiagramRenderer, Snapshot};
use std::fmt::Write;

/// Graphviz DOT notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dot;

impl DiagramRenderer for Dot {
    fn render(&self, snapshot: &Snapshot) -> String {
        let mut out = String::from("digraph StateMachine {\n");

        for state in &snapshot.states {
            if *state == snapshot.current {
                let _ = writeln!(
                    out,
                    "    \"{state}\" [shape=doublecircle, style=filled, fillcolor=lightblue];"
                );
            } else {
                let _ = writeln!(out, "    \"{state}\" [shape=circle];");
            }
        }

        for edge in &snapshot.edges {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=\"{}\"];",
                edge.from, edge.to, edge.event
            );
        }

        // No trailing newline after the closing brace.
        out.push('}');
        out
    }
}
