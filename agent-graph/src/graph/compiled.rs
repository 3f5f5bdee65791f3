//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds nodes, the edge order derived from the
//! explicit edges at compile time, and the raw edges for `get_graph`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;

use super::drawable::GraphView;
use super::logging;
use super::{Next, Node};

/// Compiled graph: immutable structure, supports invoke only.
///
/// Runs from the first node; uses each node's returned `Next` to choose the
/// next node.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    pub(super) edge_order: Vec<String>,
    pub(super) edges: Vec<(String, String)>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Runs the graph with the given state and returns the final state.
    ///
    /// - `Next::Continue`: run the next node in edge_order, or end if last.
    /// - `Next::Node(id)`: run the node with that id next.
    /// - `Next::End`: stop and return current state.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        logging::log_graph_start();
        match self.run_loop(state).await {
            Ok(state) => {
                logging::log_graph_complete();
                Ok(state)
            }
            Err(e) => {
                logging::log_graph_error(&e);
                Err(e)
            }
        }
    }

    async fn run_loop(&self, mut state: S) -> Result<S, AgentError> {
        let mut current_id = self
            .edge_order
            .first()
            .cloned()
            .ok_or_else(|| AgentError::ExecutionFailed("empty graph".into()))?;

        loop {
            let node = self.nodes.get(&current_id).cloned().ok_or_else(|| {
                AgentError::ExecutionFailed(format!("node not found: {}", current_id))
            })?;

            logging::log_node_start(&current_id);
            let (new_state, next) = node.run(state).await?;
            logging::log_node_complete(&current_id, &next);
            state = new_state;

            match next {
                Next::End => return Ok(state),
                Next::Node(id) => current_id = id,
                Next::Continue => {
                    let pos = self
                        .edge_order
                        .iter()
                        .position(|x| *x == current_id)
                        .ok_or_else(|| {
                            AgentError::ExecutionFailed(format!(
                                "node {} is not on the linear chain",
                                current_id
                            ))
                        })?;
                    match self.edge_order.get(pos + 1) {
                        Some(id) => current_id = id.clone(),
                        None => return Ok(state),
                    }
                }
            }
        }
    }

    /// Topology of this graph (node ids in chain order plus edges), for diagram export.
    pub fn get_graph(&self) -> GraphView {
        GraphView::new(self.edge_order.clone(), self.edges.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::graph::{StateGraph, END, START};

    /// **Scenario**: When edge_order is empty, invoke returns ExecutionFailed("empty graph").
    #[tokio::test]
    async fn invoke_empty_graph_returns_execution_failed() {
        let graph = CompiledStateGraph::<i32> {
            nodes: HashMap::new(),
            edge_order: vec![],
            edges: vec![],
        };
        match graph.invoke(0).await {
            Err(AgentError::ExecutionFailed(msg)) => assert!(msg.contains("empty graph"), "{}", msg),
            other => panic!("expected ExecutionFailed(\"empty graph\"), got {:?}", other),
        }
    }

    #[derive(Clone)]
    struct AddNode {
        id: &'static str,
        delta: i32,
    }

    #[async_trait]
    impl Node<i32> for AddNode {
        fn id(&self) -> &str {
            self.id
        }

        async fn run(&self, state: i32) -> Result<(i32, Next), AgentError> {
            Ok((state + self.delta, Next::Continue))
        }
    }

    /// Node that returns Next::End after one step.
    struct EndAfterNode;

    #[async_trait]
    impl Node<i32> for EndAfterNode {
        fn id(&self) -> &str {
            "stop"
        }

        async fn run(&self, state: i32) -> Result<(i32, Next), AgentError> {
            Ok((state * 10, Next::End))
        }
    }

    /// Node that jumps to a fixed id.
    struct JumpNode(&'static str);

    #[async_trait]
    impl Node<i32> for JumpNode {
        fn id(&self) -> &str {
            "jump"
        }

        async fn run(&self, state: i32) -> Result<(i32, Next), AgentError> {
            Ok((state + 1, Next::Node(self.0.to_string())))
        }
    }

    fn add(id: &'static str, delta: i32) -> Arc<dyn Node<i32>> {
        Arc::new(AddNode { id, delta })
    }

    /// **Scenario**: Continue walks the chain in edge order and ends after the last node.
    #[tokio::test]
    async fn invoke_runs_chain_in_order() {
        let mut graph = StateGraph::<i32>::new();
        graph
            .add_node("first", add("first", 1))
            .add_node("second", add("second", 2))
            .add_edge(START, "first")
            .add_edge("first", "second")
            .add_edge("second", END);
        let compiled = graph.compile().expect("graph compiles");
        assert_eq!(compiled.invoke(0).await.unwrap(), 3);
    }

    /// **Scenario**: Next::End stops before later nodes run.
    #[tokio::test]
    async fn invoke_next_end_stops_early() {
        let mut graph = StateGraph::<i32>::new();
        graph
            .add_node("stop", Arc::new(EndAfterNode))
            .add_node("after", add("after", 100))
            .add_edge(START, "stop")
            .add_edge("stop", "after")
            .add_edge("after", END);
        let compiled = graph.compile().expect("graph compiles");
        assert_eq!(compiled.invoke(2).await.unwrap(), 20);
    }

    /// **Scenario**: Next::Node(id) skips the nodes between.
    #[tokio::test]
    async fn invoke_next_node_jumps_to_specified_node() {
        let mut graph = StateGraph::<i32>::new();
        graph
            .add_node("jump", Arc::new(JumpNode("third")))
            .add_node("second", add("second", 10))
            .add_node("third", add("third", 100))
            .add_edge(START, "jump")
            .add_edge("jump", "second")
            .add_edge("second", "third")
            .add_edge("third", END);
        let compiled = graph.compile().expect("graph compiles");
        assert_eq!(compiled.invoke(0).await.unwrap(), 101);
    }

    /// **Scenario**: Jumping to an id that is not a node fails instead of panicking.
    #[tokio::test]
    async fn invoke_jump_to_unknown_node_fails() {
        let mut graph = StateGraph::<i32>::new();
        graph
            .add_node("jump", Arc::new(JumpNode("nowhere")))
            .add_edge(START, "jump")
            .add_edge("jump", END);
        let compiled = graph.compile().expect("graph compiles");
        let err = compiled.invoke(0).await.unwrap_err();
        assert!(err.to_string().contains("nowhere"), "{}", err);
    }

    #[test]
    fn get_graph_lists_nodes_in_chain_order() {
        let mut graph = StateGraph::<i32>::new();
        graph
            .add_node("b", add("b", 1))
            .add_node("a", add("a", 1))
            .add_edge(START, "a")
            .add_edge("a", "b")
            .add_edge("b", END);
        let view = graph.compile().unwrap().get_graph();
        assert_eq!(view.nodes(), ["a".to_string(), "b".to_string()]);
        assert_eq!(view.edges().len(), 3);
    }
}
