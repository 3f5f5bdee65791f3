//! Chat node: read messages, call LLM, append the assistant reply.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::MessagesState;

/// Single step of the chat graph.
///
/// Ensures the conversation starts with the configured system prompt, calls the
/// LLM once and appends its reply. Always ends the run.
///
/// **Interaction**: Implements `Node<MessagesState>`; consumes any `LlmClient`.
pub struct ChatNode {
    llm: Arc<dyn LlmClient>,
    system_prompt: Option<String>,
}

impl ChatNode {
    pub fn new(llm: Arc<dyn LlmClient>, system_prompt: Option<String>) -> Self {
        Self { llm, system_prompt }
    }
}

#[async_trait]
impl Node<MessagesState> for ChatNode {
    fn id(&self) -> &str {
        "agent"
    }

    async fn run(&self, state: MessagesState) -> Result<(MessagesState, Next), AgentError> {
        let mut messages = state.messages;
        if let Some(prompt) = &self.system_prompt {
            if !matches!(messages.first(), Some(Message::System(_))) {
                messages.insert(0, Message::system(prompt.clone()));
            }
        }
        let response = self.llm.invoke(&messages).await?;
        messages.push(Message::Assistant(response.content));
        Ok((MessagesState { messages }, Next::End))
    }
}
