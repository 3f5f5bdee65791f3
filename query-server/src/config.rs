//! Server config: listen address, model provider, graph reuse and diagram export.
//! Filled from env / .env, then overridden by command-line options.

use std::path::PathBuf;

use crate::diagram::{DiagramMode, DEFAULT_DIAGRAM_PATH};

/// Error when an environment variable or option holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address, e.g. `0.0.0.0:8000`.
    pub listen: String,
    /// Model-provider identifier handed to the graph builder (`groq`, `openai`, `echo`).
    pub model_provider: String,
    /// Build one graph lazily and reuse it instead of building one per request.
    pub graph_reuse: bool,
    /// When the topology diagram is written.
    pub diagram_mode: DiagramMode,
    /// Where the diagram is written; `DEFAULT_DIAGRAM_PATH` when unset and export is on.
    pub diagram_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8000".to_string(),
            model_provider: "groq".to_string(),
            graph_reuse: false,
            diagram_mode: DiagramMode::Off,
            diagram_path: None,
        }
    }
}

/// Optional overrides from the command line. Only set fields override the env config.
#[derive(Clone, Debug, Default)]
pub struct ServerOptions {
    pub listen: Option<String>,
    pub model_provider: Option<String>,
    pub graph_reuse: Option<bool>,
    pub diagram_mode: Option<DiagramMode>,
    pub diagram_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Fill config from env vars (call `dotenv` first to include `.env`).
    ///
    /// `MODEL_PROVIDER`, `LISTEN`, `GRAPH_REUSE`, `GRAPH_DIAGRAM_MODE`,
    /// `GRAPH_DIAGRAM_PATH`; all optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `var`.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| var(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let graph_reuse = match var("GRAPH_REUSE") {
            Some(v) => parse_bool("GRAPH_REUSE", &v)?,
            None => defaults.graph_reuse,
        };
        let diagram_path = var("GRAPH_DIAGRAM_PATH").map(PathBuf::from);
        let diagram_mode = match var("GRAPH_DIAGRAM_MODE") {
            Some(v) => v.parse().map_err(|reason| ConfigError::InvalidValue {
                name: "GRAPH_DIAGRAM_MODE",
                value: v.clone(),
                reason,
            })?,
            // A configured path alone turns on the one-off startup export.
            None if diagram_path.is_some() => DiagramMode::Startup,
            None => defaults.diagram_mode,
        };

        Ok(Self {
            listen: var("LISTEN").unwrap_or(defaults.listen),
            model_provider: var("MODEL_PROVIDER").unwrap_or(defaults.model_provider),
            graph_reuse,
            diagram_mode,
            diagram_path,
        })
    }

    /// Apply optional overrides from `ServerOptions` to this config.
    pub fn apply_options(&mut self, options: &ServerOptions) {
        if let Some(listen) = &options.listen {
            self.listen = listen.clone();
        }
        if let Some(provider) = &options.model_provider {
            self.model_provider = provider.clone();
        }
        if let Some(reuse) = options.graph_reuse {
            self.graph_reuse = reuse;
        }
        if let Some(path) = &options.diagram_path {
            self.diagram_path = Some(path.clone());
            if self.diagram_mode == DiagramMode::Off && options.diagram_mode.is_none() {
                self.diagram_mode = DiagramMode::Startup;
            }
        }
        if let Some(mode) = options.diagram_mode {
            self.diagram_mode = mode;
        }
    }

    /// Diagram path to use when export is on.
    pub fn effective_diagram_path(&self) -> PathBuf {
        self.diagram_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIAGRAM_PATH))
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
