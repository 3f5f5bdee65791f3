//! Runnable form of the chat graph: JSON envelope in, JSON state out.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AgentError;
use crate::graph::{CompiledStateGraph, GraphView};
use crate::state::MessagesState;

/// Anything that can be invoked with a `{"messages": [...]}` envelope.
///
/// The output is loosely typed on purpose: callers must not assume more than
/// "a JSON value", optionally an object holding a `messages` array whose items
/// carry a `content` field.
#[async_trait]
pub trait RunnableGraph: Send + Sync {
    /// Runs the graph to completion.
    async fn invoke(&self, input: Value) -> Result<Value, AgentError>;

    /// Graph topology for diagram export.
    fn get_graph(&self) -> GraphView;
}

/// The compiled chat graph returned by `GraphBuilder::build`.
#[derive(Clone)]
pub struct CompiledChatGraph {
    compiled: CompiledStateGraph<MessagesState>,
}

impl CompiledChatGraph {
    pub(crate) fn new(compiled: CompiledStateGraph<MessagesState>) -> Self {
        Self { compiled }
    }

    /// Typed invoke: state in, final state out.
    pub async fn invoke_state(&self, state: MessagesState) -> Result<MessagesState, AgentError> {
        self.compiled.invoke(state).await
    }
}

#[async_trait]
impl RunnableGraph for CompiledChatGraph {
    async fn invoke(&self, input: Value) -> Result<Value, AgentError> {
        let state = MessagesState::from_envelope(input)?;
        let final_state = self.invoke_state(state).await?;
        serde_json::to_value(final_state).map_err(|e| AgentError::ExecutionFailed(e.to_string()))
    }

    fn get_graph(&self) -> GraphView {
        self.compiled.get_graph()
    }
}
