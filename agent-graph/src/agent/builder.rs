//! Graph builder: `GraphBuilder::new(model_provider)` then `build()`.
//!
//! Resolves the provider's LLM client and wires the single-node chat graph
//! `START → agent → END`. Every `build()` returns an independent graph.

use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::{StateGraph, END, START};
use crate::llm::LlmClient;
use crate::state::MessagesState;

use super::chat_node::ChatNode;
use super::provider::{ModelProvider, ProviderSettings};
use super::runnable::CompiledChatGraph;

/// Default system prompt for the travel-planning assistant.
pub const TRAVEL_AGENT_PROMPT: &str = "You are a helpful travel planning assistant. \
Answer the user's request with a concrete plan: itinerary by day, places to visit, \
rough costs, transport and lodging suggestions. Say so when you are unsure about \
prices, opening hours or other facts that change over time.";

/// Builder for the chat agent graph.
///
/// **Interaction**: Consumes a [`ModelProvider`] and its [`ProviderSettings`]
/// (or an injected `LlmClient`); produces a [`CompiledChatGraph`].
pub struct GraphBuilder {
    provider: ModelProvider,
    settings: ProviderSettings,
    llm: Option<Arc<dyn LlmClient>>,
    system_prompt: Option<String>,
}

impl GraphBuilder {
    /// Parses the provider identifier and reads its settings from the environment.
    pub fn new(model_provider: &str) -> Result<Self, AgentError> {
        let provider: ModelProvider = model_provider.parse()?;
        Ok(Self::with_provider(provider, ProviderSettings::from_env(provider)))
    }

    /// Builder for a provider with explicit settings.
    pub fn with_provider(provider: ModelProvider, settings: ProviderSettings) -> Self {
        Self {
            provider,
            settings,
            llm: None,
            system_prompt: Some(TRAVEL_AGENT_PROMPT.to_string()),
        }
    }

    /// Uses `llm` instead of the provider's client.
    pub fn with_llm(mut self, llm: Arc<dyn LlmClient>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// Replaces the system prompt; `None` sends the conversation as is.
    pub fn with_system_prompt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    pub fn provider(&self) -> ModelProvider {
        self.provider
    }

    /// Compiles a fresh runnable graph.
    pub fn build(&self) -> Result<CompiledChatGraph, AgentError> {
        let llm = match &self.llm {
            Some(llm) => Arc::clone(llm),
            None => self.provider.build_llm(&self.settings)?,
        };
        let node = ChatNode::new(llm, self.system_prompt.clone());

        let mut graph = StateGraph::<MessagesState>::new();
        graph
            .add_node("agent", Arc::new(node))
            .add_edge(START, "agent")
            .add_edge("agent", END);
        Ok(CompiledChatGraph::new(graph.compile()?))
    }
}
