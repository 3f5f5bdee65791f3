//! # query-server
//!
//! HTTP front for the travel agent graph: `POST /query` with `{"query": "..."}`
//! runs the graph and answers `{"answer": "..."}` (or `{"error": "..."}`).
//!
//! - [`router::app`] builds the axum `Router`.
//! - [`graph_source::GraphSource`] builds a graph per request or shares one.
//! - [`output::AgentOutput`] normalizes whatever the graph returns.
//! - [`config::ServerConfig`] reads env / CLI settings.

pub mod config;
pub mod diagram;
pub mod dto;
pub mod error;
pub mod graph_source;
pub mod handler;
pub mod logging;
pub mod output;
pub mod router;

pub use config::{ConfigError, ServerConfig, ServerOptions};
pub use diagram::{DiagramExport, DiagramMode, DEFAULT_DIAGRAM_PATH};
pub use dto::{AgentAnswer, ErrorResponse, QueryRequest};
pub use error::ServerError;
pub use graph_source::{factory_fn, BoxError, GraphFactory, GraphSource, ProviderGraphFactory};
pub use output::{AgentOutput, ExtractionError};
pub use router::{app, AppState};
