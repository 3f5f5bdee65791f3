//! Router and shared application state.

use std::sync::Arc;

use axum::{routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::config::ServerConfig;
use crate::diagram::{DiagramExport, DiagramMode};
use crate::graph_source::{GraphFactory, GraphSource};
use crate::handler;

/// State shared by all requests.
pub struct AppState {
    pub source: GraphSource,
    /// Set when the diagram is written on every request.
    pub per_request_diagram: Option<DiagramExport>,
}

impl AppState {
    pub fn new(source: GraphSource) -> Self {
        Self {
            source,
            per_request_diagram: None,
        }
    }

    pub fn with_per_request_diagram(mut self, export: DiagramExport) -> Self {
        self.per_request_diagram = Some(export);
        self
    }

    /// State for `config`, building graphs with `factory`.
    pub fn from_config(config: &ServerConfig, factory: impl GraphFactory + 'static) -> Self {
        let source = if config.graph_reuse {
            GraphSource::shared(factory, config.model_provider.clone())
        } else {
            GraphSource::per_request(factory, config.model_provider.clone())
        };
        let state = Self::new(source);
        match config.diagram_mode {
            DiagramMode::PerRequest => {
                state.with_per_request_diagram(DiagramExport::new(config.effective_diagram_path()))
            }
            DiagramMode::Off | DiagramMode::Startup => state,
        }
    }
}

/// Builds the app: `POST /query` with request tracing and permissive CORS.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/query", post(handler::query))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<axum::body::Body>| {
                    info_span!("request", method = %req.method(), uri = %req.uri())
                }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
