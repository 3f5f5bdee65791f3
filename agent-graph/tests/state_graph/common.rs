//! Shared node types for StateGraph tests.

use agent_graph::{AgentError, Message, MessagesState, Next, Node};
use async_trait::async_trait;

/// Appends an assistant message repeating the last user message.
pub struct EchoNode;

#[async_trait]
impl Node<MessagesState> for EchoNode {
    fn id(&self) -> &str {
        "echo"
    }

    async fn run(&self, state: MessagesState) -> Result<(MessagesState, Next), AgentError> {
        let mut messages = state.messages;
        if let Some(Message::User(s)) = messages.last() {
            let reply = s.clone();
            messages.push(Message::Assistant(reply));
        }
        Ok((MessagesState { messages }, Next::Continue))
    }
}

/// Upper-cases the last assistant message.
pub struct ShoutNode;

#[async_trait]
impl Node<MessagesState> for ShoutNode {
    fn id(&self) -> &str {
        "shout"
    }

    async fn run(&self, state: MessagesState) -> Result<(MessagesState, Next), AgentError> {
        let mut messages = state.messages;
        if let Some(Message::Assistant(s)) = messages.last_mut() {
            *s = s.to_uppercase();
        }
        Ok((MessagesState { messages }, Next::Continue))
    }
}
