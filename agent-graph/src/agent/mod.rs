//! Chat agent graph: provider selection, the single chat node, the builder and
//! the runnable form handed to callers.
//!
//! `GraphBuilder::new(provider)?.build()?` yields a [`CompiledChatGraph`] that
//! implements [`RunnableGraph`]: invoke with `{"messages": [...]}`, get the
//! final state back as JSON.

mod builder;
mod chat_node;
mod provider;
mod runnable;

pub use builder::{GraphBuilder, TRAVEL_AGENT_PROMPT};
pub use chat_node::ChatNode;
pub use provider::{ModelProvider, ProviderSettings};
pub use runnable::{CompiledChatGraph, RunnableGraph};
