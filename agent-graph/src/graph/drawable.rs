//! Graph topology view and text diagram rendering.
//!
//! `CompiledStateGraph::get_graph` returns a [`GraphView`]; `render` turns it
//! into Mermaid flowchart or Graphviz DOT source bytes.

use std::fmt::Write as _;

use super::{END, START};

/// Diagram output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagramFormat {
    /// Mermaid `graph TD` flowchart.
    Mermaid,
    /// Graphviz `digraph`.
    Dot,
}

impl DiagramFormat {
    /// Picks a format from a file extension: `dot`/`gv` render DOT, anything else Mermaid.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(|e| e.to_ascii_lowercase()) {
            Some(e) if e == "dot" || e == "gv" => Self::Dot,
            _ => Self::Mermaid,
        }
    }
}

/// Nodes and edges of a compiled graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphView {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

impl GraphView {
    pub fn new(nodes: Vec<String>, edges: Vec<(String, String)>) -> Self {
        Self { nodes, edges }
    }

    /// Node ids in chain order (START/END excluded).
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges as (from, to), including the START and END sentinels.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Renders the topology as diagram source.
    pub fn render(&self, format: DiagramFormat) -> Vec<u8> {
        let text = match format {
            DiagramFormat::Mermaid => self.to_mermaid(),
            DiagramFormat::Dot => self.to_dot(),
        };
        text.into_bytes()
    }

    fn to_mermaid(&self) -> String {
        let mut out = String::from("graph TD;\n");
        let _ = writeln!(out, "\t{}([<p>{}</p>]):::first", START, START);
        for node in &self.nodes {
            let _ = writeln!(out, "\t{}({})", node, node);
        }
        let _ = writeln!(out, "\t{}([<p>{}</p>]):::last", END, END);
        for (from, to) in &self.edges {
            let _ = writeln!(out, "\t{} --> {};", from, to);
        }
        out.push_str("\tclassDef default fill:#f2f0ff,line-height:1.2\n");
        out.push_str("\tclassDef first fill-opacity:0\n");
        out.push_str("\tclassDef last fill:#bfb6fc\n");
        out
    }

    fn to_dot(&self) -> String {
        let mut out = String::from("digraph {\n");
        let _ = writeln!(out, "\t\"{}\" [shape=oval];", START);
        for node in &self.nodes {
            let _ = writeln!(out, "\t\"{}\" [shape=box];", node);
        }
        let _ = writeln!(out, "\t\"{}\" [shape=oval];", END);
        for (from, to) in &self.edges {
            let _ = writeln!(out, "\t\"{}\" -> \"{}\";", from, to);
        }
        out.push_str("}\n");
        out
    }
}
