//! Model-provider selection: maps an identifier such as `"groq"` to an LLM client.
//!
//! Providers: `groq` and `openai` (OpenAI-compatible Chat Completions via
//! `ChatOpenAI`, feature `openai`) and `echo` (offline, repeats the last user
//! message). Settings come from the environment through
//! [`ProviderSettings::from_env`] or are passed explicitly.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::AgentError;
use crate::llm::{LlmClient, MockLlm};

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const GROQ_DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Backend that serves the chat model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelProvider {
    /// Groq's OpenAI-compatible endpoint.
    Groq,
    /// OpenAI or any OpenAI-compatible base URL.
    OpenAi,
    /// No network: the reply is the last user message.
    Echo,
}

impl ModelProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
            Self::Echo => "echo",
        }
    }

    /// Environment variable holding the API key, if the provider needs one.
    pub fn api_key_var(&self) -> Option<&'static str> {
        match self {
            Self::Groq => Some("GROQ_API_KEY"),
            Self::OpenAi => Some("OPENAI_API_KEY"),
            Self::Echo => None,
        }
    }

    /// Builds the LLM client for this provider.
    ///
    /// Fails with `MissingApiKey` when a networked provider has no key.
    pub fn build_llm(&self, settings: &ProviderSettings) -> Result<Arc<dyn LlmClient>, AgentError> {
        match self {
            Self::Echo => Ok(Arc::new(MockLlm::echo())),
            Self::Groq | Self::OpenAi => self.build_openai_compatible(settings),
        }
    }

    #[cfg(feature = "openai")]
    fn build_openai_compatible(
        &self,
        settings: &ProviderSettings,
    ) -> Result<Arc<dyn LlmClient>, AgentError> {
        Ok(Arc::new(self.chat_openai(settings)?))
    }

    /// OpenAI-compatible client for Groq or OpenAI with defaults filled in.
    #[cfg(feature = "openai")]
    fn chat_openai(&self, settings: &ProviderSettings) -> Result<crate::llm::ChatOpenAI, AgentError> {
        use async_openai::config::OpenAIConfig;

        use crate::llm::ChatOpenAI;

        let key_var = self.api_key_var().unwrap_or("API key");
        let api_key = settings
            .api_key
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(AgentError::MissingApiKey(key_var))?;
        let (default_base, default_model) = match self {
            Self::Groq => (Some(GROQ_BASE_URL), GROQ_DEFAULT_MODEL),
            _ => (None, OPENAI_DEFAULT_MODEL),
        };
        let model = settings
            .model
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(default_model);

        let mut config = OpenAIConfig::new().with_api_key(api_key);
        let base = settings
            .base_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(default_base);
        if let Some(base) = base {
            // async_openai appends "/chat/completions"; avoid a double slash.
            config = config.with_api_base(base.trim_end_matches('/'));
        }
        let mut llm = ChatOpenAI::with_config(config, model);
        if let Some(t) = settings.temperature {
            llm = llm.with_temperature(t);
        }
        Ok(llm)
    }

    #[cfg(not(feature = "openai"))]
    fn build_openai_compatible(
        &self,
        _settings: &ProviderSettings,
    ) -> Result<Arc<dyn LlmClient>, AgentError> {
        Err(AgentError::ExecutionFailed(format!(
            "model provider {} requires the openai feature",
            self
        )))
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "openai" => Ok(Self::OpenAi),
            "echo" => Ok(Self::Echo),
            _ => Err(AgentError::UnknownProvider(s.to_string())),
        }
    }
}

/// Connection settings for a provider. `None` fields fall back to provider defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    /// Sampling temperature; the provider default when `None`.
    pub temperature: Option<f32>,
}

impl ProviderSettings {
    /// Reads settings for `provider` from the environment.
    ///
    /// - groq: `GROQ_API_KEY`, `GROQ_MODEL`, `GROQ_BASE_URL`, `GROQ_TEMPERATURE`
    /// - openai: `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL` (or `OPENAI_API_BASE`),
    ///   `OPENAI_TEMPERATURE`
    /// - echo: nothing
    ///
    /// A temperature that does not parse as a number is ignored.
    pub fn from_env(provider: ModelProvider) -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|s| !s.is_empty());
        let temperature = |name: &str| var(name).and_then(|v| v.trim().parse::<f32>().ok());
        match provider {
            ModelProvider::Groq => Self {
                api_key: var("GROQ_API_KEY"),
                base_url: var("GROQ_BASE_URL"),
                model: var("GROQ_MODEL"),
                temperature: temperature("GROQ_TEMPERATURE"),
            },
            ModelProvider::OpenAi => Self {
                api_key: var("OPENAI_API_KEY"),
                base_url: var("OPENAI_BASE_URL").or_else(|| var("OPENAI_API_BASE")),
                model: var("OPENAI_MODEL"),
                temperature: temperature("OPENAI_TEMPERATURE"),
            },
            ModelProvider::Echo => Self::default(),
        }
    }
}
