use super::{DiagramRenderer, Snapshot};
use std::fmt::Write;

/// Mermaid `stateDiagram-v2` notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mermaid;

impl DiagramRenderer for Mermaid {
    fn render(&self, snapshot: &Snapshot) -> String {
        let mut out = String::from("stateDiagram-v2\n");

        for state in &snapshot.states {
            if *state == snapshot.current {
                let _ = writeln!(out, "    {state} : [*] {state}");
            } else {
                let _ = writeln!(out, "    {state}");
            }
        }

        for edge in &snapshot.edges {
            let _ = writeln!(out, "    {} --> {} : {}", edge.from, edge.to, edge.event);
        }

        out
    }
}
