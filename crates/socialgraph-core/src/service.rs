//! Service facade used by the transport layer
//!
//! Two operations: load the statement file at startup, and build the
//! friendship graph on request. The store handle is injected, so the same
//! facade runs against Memgraph in production and [`crate::MemoryStore`]
//! in tests.

use crate::error::ServiceResult;
use crate::graph::Graph;
use crate::loader::{LoadPolicy, StatementLoader};
use crate::projector::project;
use crate::query::fetch_friend_edges;
use crate::store::{GraphStore, StoreResult};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct GraphService {
    store: Arc<dyn GraphStore>,
    policy: LoadPolicy,
    initialized: Arc<OnceCell<()>>,
}

impl std::fmt::Debug for GraphService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphService")
            .field("policy", &self.policy)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl GraphService {
    pub fn new(store: Arc<dyn GraphStore>, policy: LoadPolicy) -> Self {
        Self {
            store,
            policy,
            initialized: Arc::new(OnceCell::new()),
        }
    }

    /// Startup load phase.
    ///
    /// Runs [`Self::reload`] the first time it is called on this service
    /// (and its clones); later calls only log. Must finish before the server
    /// starts accepting graph requests. Returns whether the load ran.
    pub async fn initialize(&self, path: &Path) -> bool {
        let ran = AtomicBool::new(false);
        let ran_ref = &ran;
        self.initialized
            .get_or_init(|| async move {
                ran_ref.store(true, Ordering::SeqCst);
                self.reload(path).await;
            })
            .await;

        let ran = ran.load(Ordering::SeqCst);
        if !ran {
            warn!(path = %path.display(), "Startup load already done, skipping");
        }
        ran
    }

    /// Close the startup phase without touching the store.
    ///
    /// Used when the store is served as is. Any later [`Self::initialize`]
    /// becomes a no-op. Returns whether the phase was still open.
    pub fn skip_initialize(&self) -> bool {
        let skipped = self.initialized.set(()).is_ok();
        if skipped {
            info!("Startup load skipped, serving current store content");
        } else {
            warn!("Startup phase already closed");
        }
        skipped
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    /// Reset the store and replay `path` against it.
    ///
    /// Failures are logged and swallowed: startup continues with whatever
    /// the store holds at that point.
    pub async fn reload(&self, path: &Path) {
        let loader = StatementLoader::new(self.store.as_ref(), self.policy);
        match loader.load(path).await {
            Ok(report) if report.failed > 0 => warn!(
                path = %path.display(),
                applied = report.applied,
                failed = report.failed,
                "Data import finished with rejected statements"
            ),
            Ok(report) => info!(
                path = %path.display(),
                applied = report.applied,
                "Data import finished"
            ),
            Err(e) => error!(path = %path.display(), error = %e, "Data import error"),
        }
    }

    /// Fetch friendship rows and project them into a fresh graph.
    pub async fn get_graph(&self) -> ServiceResult<Graph> {
        let result = self.build_graph().await;
        if let Err(e) = &result {
            error!(error = %e, "Data loading error");
        }
        result
    }

    async fn build_graph(&self) -> ServiceResult<Graph> {
        let rows = fetch_friend_edges(self.store.as_ref()).await?;
        let graph = project(&rows)?;
        if graph.is_empty() {
            debug!("No friendships in store");
        } else {
            debug!(
                nodes = graph.nodes.len(),
                links = graph.links.len(),
                "Friendship graph built"
            );
        }
        Ok(graph)
    }

    /// Whether the store currently answers
    pub async fn ping(&self) -> StoreResult<()> {
        self.store.ping().await
    }
}
