//! Best-effort export of the graph topology as a diagram file.
//!
//! The format follows the file extension (`.dot`/`.gv` → Graphviz, otherwise
//! Mermaid). Failures are logged at `warn` and never reach the caller.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use agent_graph::{DiagramFormat, RunnableGraph};

/// Path used when export is on but no path is configured.
pub const DEFAULT_DIAGRAM_PATH: &str = "my_graph.mmd";

/// When the diagram is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiagramMode {
    #[default]
    Off,
    /// Once, when the server starts.
    Startup,
    /// On every request, before invoking the graph.
    PerRequest,
}

impl FromStr for DiagramMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "off" | "none" => Ok(Self::Off),
            "startup" => Ok(Self::Startup),
            "per_request" | "request" => Ok(Self::PerRequest),
            _ => Err("expected off, startup or per_request".to_string()),
        }
    }
}

/// Diagram destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagramExport {
    path: PathBuf,
}

impl DiagramExport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DiagramFormat {
        DiagramFormat::from_extension(self.path.extension().and_then(|e| e.to_str()))
    }

    /// Renders `graph` and writes the bytes to the path.
    pub async fn write(&self, graph: &dyn RunnableGraph) -> std::io::Result<PathBuf> {
        let bytes = graph.get_graph().render(self.format());
        tokio::fs::write(&self.path, bytes).await?;
        Ok(std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone()))
    }

    /// Like [`write`](Self::write) but only logs the outcome.
    pub async fn export_best_effort(&self, graph: &dyn RunnableGraph) {
        match self.write(graph).await {
            Ok(path) => tracing::info!(path = %path.display(), "graph diagram written"),
            Err(e) => tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "graph diagram export failed"
            ),
        }
    }
}
