//! Agent execution error types.
//!
//! Returned by `Node::run`, `LlmClient::invoke`, `GraphBuilder::build` and
//! `RunnableGraph::invoke`.

use thiserror::Error;

use crate::graph::CompilationError;

/// Agent execution error.
///
/// One flat enum for the whole graph crate; callers that only need a message
/// use the `Display` text.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// The model-provider identifier does not name a known backend.
    #[error("unknown model provider: {0}")]
    UnknownProvider(String),

    /// A provider was selected but its API key is not configured.
    #[error("{0} must be set to use this model provider")]
    MissingApiKey(&'static str),

    /// The invoke input is not a `{"messages": [...]}` envelope.
    #[error("invalid input envelope: {0}")]
    InvalidEnvelope(String),

    /// The graph failed to compile.
    #[error(transparent)]
    Compilation(#[from] CompilationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display format of ExecutionFailed contains "execution failed" and the message.
    #[test]
    fn agent_error_display_execution_failed() {
        let err = AgentError::ExecutionFailed("msg".to_string());
        let s = err.to_string();
        assert!(
            s.contains("execution failed"),
            "Display should contain 'execution failed': {}",
            s
        );
        assert!(s.contains("msg"), "Display should contain message: {}", s);
    }

    /// **Scenario**: MissingApiKey names the environment variable.
    #[test]
    fn agent_error_display_missing_api_key() {
        let err = AgentError::MissingApiKey("GROQ_API_KEY");
        assert_eq!(
            err.to_string(),
            "GROQ_API_KEY must be set to use this model provider"
        );
    }

    /// **Scenario**: Compilation errors are shown without an extra prefix.
    #[test]
    fn agent_error_compilation_is_transparent() {
        let err = AgentError::from(CompilationError::MissingStart);
        assert_eq!(err.to_string(), "graph must have exactly one edge from START");
    }
}
