//! Graph node trait: one step in a StateGraph.

use async_trait::async_trait;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// **Interaction**: Registered with `StateGraph::add_node`; driven by
/// `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + 'static,
{
    /// Node id (e.g. `"agent"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// Return `Next::Continue` to follow the linear edge order; `Next::Node(id)` to
    /// jump to a node; `Next::End` to stop.
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}
