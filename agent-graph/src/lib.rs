//! # agent-graph
//!
//! A minimal, LangGraph-style agent graph in Rust: one shared state type flows
//! through nodes (**state-in, state-out**), and the compiled graph is invoked
//! with a JSON envelope `{"messages": [...]}`.
//!
//! ## Main Modules
//!
//! - [`graph`]: `StateGraph`, `CompiledStateGraph`, `Node`, `Next`, `GraphView`.
//! - [`llm`]: `LlmClient` trait, `MockLlm`, and `ChatOpenAI` (feature `openai`).
//! - [`agent`]: `GraphBuilder`, `ModelProvider`, `RunnableGraph` and the chat node.
//! - [`message`] / [`state`]: `Message` and `MessagesState`.
//!
//! ## Features
//!
//! - `openai` (default): OpenAI-compatible chat (OpenAI, Groq) via `async-openai`.
//! - `tracing`: structured node/graph logging via the `tracing` crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agent_graph::{GraphBuilder, RunnableGraph};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), agent_graph::AgentError> {
//! let graph = GraphBuilder::new("echo")?.build()?;
//! let out = graph.invoke(json!({ "messages": ["hello"] })).await?;
//! println!("{}", out["messages"][2]["content"]);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod state;

pub use agent::{
    ChatNode, CompiledChatGraph, GraphBuilder, ModelProvider, ProviderSettings, RunnableGraph,
    TRAVEL_AGENT_PROMPT,
};
pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, DiagramFormat, GraphView, Next, Node, StateGraph, END,
    START,
};
pub use llm::{LlmClient, LlmResponse, MockLlm};
#[cfg(feature = "openai")]
pub use llm::ChatOpenAI;
pub use message::Message;
pub use state::{MessagesState, MESSAGES_KEY};
