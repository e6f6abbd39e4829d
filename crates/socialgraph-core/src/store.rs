//! Graph store abstraction
//!
//! The core never talks to a database directly. Everything goes through
//! [`GraphStore`], which is handed to the loader, the executor and the
//! service as an `Arc<dyn GraphStore>`. Production code plugs in the
//! Memgraph client, tests plug in [`crate::MemoryStore`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Statement rejected: {0}")]
    Statement(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// A node returned by the store.
///
/// Only the pieces the projection needs are modelled: the store id, the
/// labels and a JSON view of the properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,
    pub labels: Vec<String>,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Entity {
    /// Build a `Person` entity carrying only a `name` property
    pub fn person(id: i64, name: impl Into<String>) -> Self {
        let mut properties = serde_json::Map::new();
        properties.insert("name".to_string(), serde_json::Value::String(name.into()));
        Self {
            id,
            labels: vec!["Person".to_string()],
            properties,
        }
    }

    /// The string-valued `name` property, if present
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(|v| v.as_str())
    }
}

/// One result row: column name to entity
pub type Record = HashMap<String, Entity>;

/// Contract the core needs from the graph database.
///
/// Implementations must be usable from concurrent requests; `get_graph`
/// calls only ever read.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Drop every node and relationship in the store.
    async fn reset(&self) -> StoreResult<()>;

    /// Submit one statement verbatim, discarding any result.
    async fn execute(&self, statement: &str) -> StoreResult<()>;

    /// Run a read query and collect its rows.
    ///
    /// `columns` names the returned columns to read back; every column must
    /// hold a node.
    async fn execute_and_fetch(&self, query: &str, columns: &[&str]) -> StoreResult<Vec<Record>>;

    /// Cheap round trip used for readiness checks.
    async fn ping(&self) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_entity_exposes_name() {
        let alice = Entity::person(1, "Alice");
        assert_eq!(alice.name(), Some("Alice"));
        assert_eq!(alice.labels, vec!["Person".to_string()]);
    }

    #[test]
    fn test_non_string_name_is_absent() {
        let mut entity = Entity::default();
        entity
            .properties
            .insert("name".to_string(), serde_json::json!(42));
        assert_eq!(entity.name(), None);
    }
}
