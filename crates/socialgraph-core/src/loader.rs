//! Statement loader
//!
//! Resets the store, then replays a line-oriented statement file against it.
//! Each non-blank line is one statement and goes to the store verbatim.

use crate::error::LoadError;
use crate::store::GraphStore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// What to do when the store rejects a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Abort the replay at the first rejected statement. Statements applied
    /// before it stay in the store.
    #[default]
    Stop,
    /// Log the rejected statement and keep replaying the rest of the file.
    Continue,
}

/// Counters for one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub applied: usize,
    pub skipped_blank: usize,
    pub failed: usize,
}

pub struct StatementLoader<'a> {
    store: &'a dyn GraphStore,
    policy: LoadPolicy,
}

impl<'a> StatementLoader<'a> {
    pub fn new(store: &'a dyn GraphStore, policy: LoadPolicy) -> Self {
        Self { store, policy }
    }

    /// Drop the store's content and replay `path` against it.
    ///
    /// The reset always happens first, even when the file turns out to be
    /// unreadable, so loading the same file twice leaves the store in the same
    /// state. Nothing is rolled back on failure.
    pub async fn load(&self, path: &Path) -> Result<LoadReport, LoadError> {
        info!(path = %path.display(), "Resetting store before load");
        self.store.reset().await.map_err(LoadError::Reset)?;

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let mut report = LoadReport::default();
        for (index, raw) in content.split('\n').enumerate() {
            let line = index + 1;
            let statement = raw.strip_suffix('\r').unwrap_or(raw);

            if statement.trim().is_empty() {
                report.skipped_blank += 1;
                continue;
            }

            match self.store.execute(statement).await {
                Ok(()) => {
                    debug!(line, "Statement applied");
                    report.applied += 1;
                }
                Err(source) => match self.policy {
                    LoadPolicy::Stop => return Err(LoadError::Statement { line, source }),
                    LoadPolicy::Continue => {
                        warn!(line, error = %source, "Statement rejected, continuing");
                        report.failed += 1;
                    }
                },
            }
        }

        Ok(report)
    }
}
