//! In-memory [`GraphStore`] for tests
//!
//! The store keeps the log of applied statements instead of a real graph.
//! Query rows come from a row source: a function of the applied statements,
//! so a test decides how its statement dialect maps to rows. Failures can be
//! injected for reset, for individual statements and for fetches.

use crate::store::{GraphStore, Record, StoreError, StoreResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;

type RowSource = dyn Fn(&[String]) -> Vec<Record> + Send + Sync;

#[derive(Default)]
struct MemoryState {
    statements: Vec<String>,
    queries: Vec<String>,
    resets: usize,
    rejected: HashSet<String>,
    fail_reset: bool,
    fail_fetch: bool,
    offline: bool,
}

pub struct MemoryStore {
    state: Mutex<MemoryState>,
    rows: Box<RowSource>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MemoryStore")
            .field("statements", &state.statements.len())
            .field("queries", &state.queries.len())
            .field("resets", &state.resets)
            .finish()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Store whose queries never return rows
    pub fn new() -> Self {
        Self::with_row_source(|_| Vec::new())
    }

    /// Store whose queries always return `rows`, whatever was loaded
    pub fn with_rows(rows: Vec<Record>) -> Self {
        Self::with_row_source(move |_| rows.clone())
    }

    /// Store whose query rows are computed from the applied statements
    pub fn with_row_source<F>(source: F) -> Self
    where
        F: Fn(&[String]) -> Vec<Record> + Send + Sync + 'static,
    {
        Self {
            state: Mutex::new(MemoryState::default()),
            rows: Box::new(source),
        }
    }

    /// Statements applied since the last reset, in order
    pub fn statements(&self) -> Vec<String> {
        self.state.lock().statements.clone()
    }

    /// Every query issued through `execute_and_fetch`
    pub fn queries(&self) -> Vec<String> {
        self.state.lock().queries.clone()
    }

    pub fn reset_count(&self) -> usize {
        self.state.lock().resets
    }

    /// Make the store reject `statement` (compared verbatim)
    pub fn reject_statement(&self, statement: impl Into<String>) {
        self.state.lock().rejected.insert(statement.into());
    }

    pub fn set_reset_failure(&self, fail: bool) {
        self.state.lock().fail_reset = fail;
    }

    pub fn set_fetch_failure(&self, fail: bool) {
        self.state.lock().fail_fetch = fail;
    }

    /// Simulate an unreachable server: every call fails with a connection error
    pub fn set_offline(&self, offline: bool) {
        self.state.lock().offline = offline;
    }

    fn check_online(state: &MemoryState) -> StoreResult<()> {
        if state.offline {
            return Err(StoreError::Connection(
                "memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn reset(&self) -> StoreResult<()> {
        let mut state = self.state.lock();
        Self::check_online(&state)?;
        if state.fail_reset {
            return Err(StoreError::Statement("reset refused".to_string()));
        }
        state.statements.clear();
        state.resets += 1;
        Ok(())
    }

    async fn execute(&self, statement: &str) -> StoreResult<()> {
        let mut state = self.state.lock();
        Self::check_online(&state)?;
        if state.rejected.contains(statement) {
            return Err(StoreError::Statement(format!(
                "malformed statement: {statement}"
            )));
        }
        state.statements.push(statement.to_string());
        Ok(())
    }

    async fn execute_and_fetch(&self, query: &str, _columns: &[&str]) -> StoreResult<Vec<Record>> {
        let statements = {
            let mut state = self.state.lock();
            Self::check_online(&state)?;
            state.queries.push(query.to_string());
            if state.fail_fetch {
                return Err(StoreError::Query("query refused".to_string()));
            }
            state.statements.clone()
        };
        Ok((self.rows)(&statements))
    }

    async fn ping(&self) -> StoreResult<()> {
        Self::check_online(&self.state.lock())
    }
}
