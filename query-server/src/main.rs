//! HTTP server exposing POST /query in front of the travel agent graph.
//!
//! Configure via env: MODEL_PROVIDER, LISTEN, GRAPH_REUSE, GRAPH_DIAGRAM_MODE,
//! GRAPH_DIAGRAM_PATH, LOG_FILE, plus the provider's key (GROQ_API_KEY,
//! OPENAI_API_KEY). Load .env with dotenv; command-line flags override env.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use query_server::graph_source::GraphFactory;
use query_server::logging::init_tracing;
use query_server::{
    app, AppState, DiagramExport, DiagramMode, ProviderGraphFactory, ServerConfig, ServerOptions,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "query-server")]
#[command(about = "Serve POST /query in front of the travel agent graph")]
struct Args {
    /// Bind address (overrides LISTEN)
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,

    /// Model provider: groq, openai or echo (overrides MODEL_PROVIDER)
    #[arg(long, value_name = "PROVIDER")]
    model_provider: Option<String>,

    /// Build one graph on first use and reuse it; `--graph-reuse=false` turns it off (overrides GRAPH_REUSE)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    graph_reuse: Option<bool>,

    /// Write the graph diagram here; .dot/.gv for Graphviz, else Mermaid
    #[arg(long, value_name = "PATH")]
    diagram_path: Option<PathBuf>,

    /// When to write the diagram: off, startup or per_request
    #[arg(long, value_name = "MODE")]
    diagram_mode: Option<DiagramMode>,
}

impl From<Args> for ServerOptions {
    fn from(args: Args) -> Self {
        ServerOptions {
            listen: args.listen,
            model_provider: args.model_provider,
            graph_reuse: args.graph_reuse,
            diagram_mode: args.diagram_mode,
            diagram_path: args.diagram_path,
        }
    }
}

/// Load .env from current directory; if not found, try parent (workspace root when run from crate dir).
fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        return;
    }
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(parent) = cwd.parent() {
            let env_path = parent.join(".env");
            if env_path.is_file() {
                let _ = dotenv::from_path(env_path);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    load_dotenv();

    if std::env::var("LOG_FILE").is_err() {
        eprintln!("query-server: LOG_FILE not set, logs only to stdout. Set LOG_FILE=./query-server.log to also write to a file.");
    }
    init_tracing()?;

    let mut config = ServerConfig::from_env()?;
    config.apply_options(&args.into());
    info!(
        provider = %config.model_provider,
        graph_reuse = config.graph_reuse,
        diagram_mode = ?config.diagram_mode,
        "config loaded"
    );

    if config.diagram_mode == DiagramMode::Startup {
        let export = DiagramExport::new(config.effective_diagram_path());
        match ProviderGraphFactory.build(&config.model_provider) {
            Ok(graph) => export.export_best_effort(graph.as_ref()).await,
            Err(e) => tracing::warn!(error = %e, "graph diagram skipped: graph build failed"),
        }
    }

    let state = Arc::new(AppState::from_config(&config, ProviderGraphFactory));
    let app = app(state);

    info!("listening on http://{}", config.listen);
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_reuse_flag_is_tri_state() {
        let parse = |argv: &[&str]| Args::try_parse_from(argv).unwrap().graph_reuse;
        assert_eq!(parse(&["query-server"]), None);
        assert_eq!(parse(&["query-server", "--graph-reuse"]), Some(true));
        assert_eq!(parse(&["query-server", "--graph-reuse=false"]), Some(false));
    }

    #[test]
    fn args_become_options() {
        let args = Args::try_parse_from([
            "query-server",
            "--model-provider",
            "echo",
            "--diagram-mode",
            "per_request",
        ])
        .unwrap();
        let options: ServerOptions = args.into();
        assert_eq!(options.model_provider.as_deref(), Some("echo"));
        assert_eq!(options.diagram_mode, Some(DiagramMode::PerRequest));
        assert_eq!(options.graph_reuse, None);
    }
}
