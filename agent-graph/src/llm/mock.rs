//! Mock LLM for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::{last_user_text, Message};

enum Reply {
    Fixed(String),
    EchoLastUser,
    Fail(String),
}

/// Mock LLM: fixed assistant text, an echo of the last user message, or a
/// fixed failure. Counts calls so tests can assert how often it was hit.
///
/// **Interaction**: Implements `LlmClient`; used by the chat node.
pub struct MockLlm {
    reply: Reply,
    calls: AtomicUsize,
}

impl MockLlm {
    /// Always answers with `content`.
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self::from_reply(Reply::Fixed(content.into()))
    }

    /// Answers with the text of the last user message (empty when there is none).
    pub fn echo() -> Self {
        Self::from_reply(Reply::EchoLastUser)
    }

    /// Always fails with `ExecutionFailed(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_reply(Reply::Fail(message.into()))
    }

    fn from_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completed `invoke` calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let content = match &self.reply {
            Reply::Fixed(s) => s.clone(),
            Reply::EchoLastUser => last_user_text(messages).unwrap_or_default().to_string(),
            Reply::Fail(msg) => return Err(AgentError::ExecutionFailed(msg.clone())),
        };
        Ok(LlmResponse { content })
    }
}
