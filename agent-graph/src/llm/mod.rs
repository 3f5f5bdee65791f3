//! LLM client abstraction used by the chat node.
//!
//! The chat node depends on a callable that returns assistant text; this
//! module defines the trait, a mock, and an OpenAI-compatible client.

mod mock;

#[cfg(feature = "openai")]
mod openai;

pub use mock::MockLlm;

#[cfg(feature = "openai")]
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// Response from an LLM completion: assistant message text.
///
/// **Interaction**: Returned by `LlmClient::invoke()`; the chat node appends
/// `content` as a new assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
}

/// LLM client: given messages, returns assistant text.
///
/// Implementations: `MockLlm` (fixed, echo or failing), `ChatOpenAI` (real
/// OpenAI-compatible API, feature `openai`).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;
}
