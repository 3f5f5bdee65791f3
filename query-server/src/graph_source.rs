//! Where the handler gets its runnable graph: a fresh one per request, or one
//! shared graph built lazily on first use.

use std::sync::Arc;

use agent_graph::{GraphBuilder, RunnableGraph};
use tokio::sync::OnceCell;

/// Boxed error crossing the factory seam; its `Display` text reaches the client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Builds a runnable graph for a model-provider identifier.
pub trait GraphFactory: Send + Sync {
    fn build(&self, model_provider: &str) -> Result<Arc<dyn RunnableGraph>, BoxError>;
}

impl<F> GraphFactory for F
where
    F: Fn(&str) -> Result<Arc<dyn RunnableGraph>, BoxError> + Send + Sync,
{
    fn build(&self, model_provider: &str) -> Result<Arc<dyn RunnableGraph>, BoxError> {
        self(model_provider)
    }
}

/// Pins a closure's signature so it can be used as a [`GraphFactory`].
pub fn factory_fn<F>(f: F) -> F
where
    F: Fn(&str) -> Result<Arc<dyn RunnableGraph>, BoxError> + Send + Sync + 'static,
{
    f
}

/// Factory backed by `GraphBuilder::new(model_provider).build()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProviderGraphFactory;

impl GraphFactory for ProviderGraphFactory {
    fn build(&self, model_provider: &str) -> Result<Arc<dyn RunnableGraph>, BoxError> {
        let graph: Arc<dyn RunnableGraph> = Arc::new(GraphBuilder::new(model_provider)?.build()?);
        Ok(graph)
    }
}

/// Graph acquisition strategy.
pub struct GraphSource {
    factory: Box<dyn GraphFactory>,
    model_provider: String,
    /// `Some` in shared mode; an uninitialized cell retries the build.
    shared: Option<OnceCell<Arc<dyn RunnableGraph>>>,
}

impl GraphSource {
    /// A new graph for every `acquire`.
    pub fn per_request(factory: impl GraphFactory + 'static, model_provider: impl Into<String>) -> Self {
        Self {
            factory: Box::new(factory),
            model_provider: model_provider.into(),
            shared: None,
        }
    }

    /// One graph, built by the first successful `acquire` and reused after that.
    pub fn shared(factory: impl GraphFactory + 'static, model_provider: impl Into<String>) -> Self {
        Self {
            factory: Box::new(factory),
            model_provider: model_provider.into(),
            shared: Some(OnceCell::new()),
        }
    }

    pub fn model_provider(&self) -> &str {
        &self.model_provider
    }

    pub fn is_shared(&self) -> bool {
        self.shared.is_some()
    }

    /// Returns a graph ready to invoke.
    pub async fn acquire(&self) -> Result<Arc<dyn RunnableGraph>, BoxError> {
        match &self.shared {
            None => self.factory.build(&self.model_provider),
            Some(cell) => {
                let graph = cell
                    .get_or_try_init(|| async {
                        tracing::info!(provider = %self.model_provider, "building shared graph");
                        self.factory.build(&self.model_provider)
                    })
                    .await?;
                Ok(Arc::clone(graph))
            }
        }
    }
}
