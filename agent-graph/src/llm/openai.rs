//! OpenAI-compatible Chat Completions client implementing `LlmClient` (ChatOpenAI).
//!
//! Works against any OpenAI-compatible base URL (OpenAI, Groq, local gateways).
//!
//! **Interaction**: Implements `LlmClient`; used by the chat node like `MockLlm`.
//! Depends on `async_openai` (feature `openai`).

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};

/// OpenAI Chat Completions client implementing `LlmClient`.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build client with custom config (API key and base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: None,
        }
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sampling temperature sent with every request, if set.
    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }

    /// Model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Convert our `Message` list to OpenAI request messages.
    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
                Message::Assistant(s) => ChatCompletionRequestMessage::Assistant((s.as_str()).into()),
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(messages));
        if let Some(t) = self.temperature {
            args.temperature(t);
        }

        let request = args.build().map_err(|e| {
            AgentError::ExecutionFailed(format!("OpenAI request build failed: {}", e))
        })?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("OpenAI API error: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::ExecutionFailed("OpenAI returned no choices".to_string()))?;

        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AgentError::ExecutionFailed("OpenAI returned no content".to_string()))?;
        Ok(LlmResponse { content })
    }
}

#[cfg(all(test, feature = "openai"))]
mod tests {
    use super::*;

    /// **Scenario**: with_config keeps the model name and the configured temperature.
    #[test]
    fn chat_openai_with_config_creates_client() {
        let config = OpenAIConfig::new()
            .with_api_key("test-key")
            .with_api_base("https://api.groq.com/openai/v1");
        let llm = ChatOpenAI::with_config(config, "llama-3.1-8b-instant").with_temperature(0.2);
        assert_eq!(llm.model(), "llama-3.1-8b-instant");
        assert_eq!(llm.temperature(), Some(0.2));
    }

    #[test]
    fn messages_to_request_keeps_order_and_roles() {
        let out = ChatOpenAI::messages_to_request(&[
            Message::system("s"),
            Message::user("u"),
            Message::assistant("a"),
        ]);
        assert_eq!(out.len(), 3);
        assert!(matches!(out[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(out[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(out[2], ChatCompletionRequestMessage::Assistant(_)));
    }
}
