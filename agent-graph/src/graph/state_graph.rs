//! State graph: nodes + explicit edges (from → to).
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, then `compile` to get a
//! `CompiledStateGraph`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph: nodes plus explicit edges. No conditional edges; nodes route
/// at run time through the `Next` they return.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges (from_id, to_id) in insertion order.
    edges: Vec<(String, String)>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node; replaces any node with the same id.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Both ids (except START/END) must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Validates the edges and builds the executable graph.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }

        let first = match single(self.edges.iter().filter(|(f, _)| f == START).map(|(_, t)| t)) {
            Some(first) => first.clone(),
            None => return Err(CompilationError::MissingStart),
        };
        let expected_last = match single(self.edges.iter().filter(|(_, t)| t == END).map(|(f, _)| f)) {
            Some(last) => last.clone(),
            None => return Err(CompilationError::MissingEnd),
        };

        let mut froms = HashSet::new();
        let mut tos = HashSet::new();
        for (from, to) in &self.edges {
            if from != START && !froms.insert(from.as_str()) {
                return Err(CompilationError::InvalidChain("duplicate from (branch)".into()));
            }
            if to != END && !tos.insert(to.as_str()) {
                return Err(CompilationError::InvalidChain(
                    "duplicate to (merge or branch)".into(),
                ));
            }
        }

        let next_map: HashMap<&str, &str> = self
            .edges
            .iter()
            .filter(|(f, _)| f != START)
            .map(|(f, t)| (f.as_str(), t.as_str()))
            .collect();

        let mut edge_order = vec![first.clone()];
        let mut visited = HashSet::from([first.clone()]);
        let mut current = first;
        while let Some(&next) = next_map.get(current.as_str()) {
            if next == END {
                if current != expected_last {
                    return Err(CompilationError::InvalidChain(
                        "chain tail does not match the single edge to END".into(),
                    ));
                }
                break;
            }
            if !visited.insert(next.to_string()) {
                return Err(CompilationError::InvalidChain("cycle detected".into()));
            }
            edge_order.push(next.to_string());
            current = next.to_string();
        }
        if current != expected_last {
            return Err(CompilationError::InvalidChain(format!(
                "chain stops at {} before reaching END",
                current
            )));
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            edge_order,
            edges: self.edges,
        })
    }
}

/// Returns the only item, or None when there are zero or several.
fn single<T>(mut iter: impl Iterator<Item = T>) -> Option<T> {
    let first = iter.next()?;
    match iter.next() {
        Some(_) => None,
        None => Some(first),
    }
}
