//! State graph: nodes + linear edges, compile and invoke.
//!
//! Add nodes and edges, compile, then invoke with state. The compiled graph
//! also exposes its topology as a [`GraphView`] for diagram export.

mod compile_error;
mod compiled;
mod drawable;
pub(crate) mod logging;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use drawable::{DiagramFormat, GraphView};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, END, START};
