//! Memgraph client
//!
//! Thin wrapper around a `neo4rs` connection pool. The pool is shared by
//! clones, so one client serves every request concurrently.

use crate::error::{MemgraphError, MemgraphResult};
use async_trait::async_trait;
use neo4rs::{query, ConfigBuilder, Graph, Node};
use socialgraph_config::StoreConfig;
use socialgraph_core::{Entity, GraphStore, Record, StoreResult};
use tracing::{debug, info};

/// Drops every node together with its relationships
const DROP_ALL: &str = "MATCH (n) DETACH DELETE n;";

const PING: &str = "RETURN 1;";

#[derive(Clone)]
pub struct MemgraphClient {
    graph: Graph,
    uri: String,
}

impl std::fmt::Debug for MemgraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemgraphClient")
            .field("uri", &self.uri)
            .finish()
    }
}

impl MemgraphClient {
    /// Open a connection pool to the configured server
    pub async fn connect(config: &StoreConfig) -> MemgraphResult<Self> {
        let uri = config.bolt_uri();
        info!(uri = %uri, "Connecting to Memgraph");

        let driver_config = ConfigBuilder::default()
            .uri(uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .max_connections(config.max_connections)
            .build()
            .map_err(|e| MemgraphError::Config(e.to_string()))?;

        let graph = Graph::connect(driver_config)
            .await
            .map_err(|e| MemgraphError::Connection(format!("Failed to connect to {uri}: {e}")))?;

        Ok(Self { graph, uri })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    async fn run(&self, statement: &str) -> MemgraphResult<()> {
        self.graph
            .run(query(statement))
            .await
            .map_err(|e| MemgraphError::Statement(e.to_string()))
    }

    async fn fetch(&self, cypher: &str, columns: &[&str]) -> MemgraphResult<Vec<Record>> {
        let mut stream = self
            .graph
            .execute(query(cypher))
            .await
            .map_err(|e| MemgraphError::Query(e.to_string()))?;

        let mut records = Vec::new();
        while let Some(row) = stream
            .next()
            .await
            .map_err(|e| MemgraphError::Query(e.to_string()))?
        {
            let mut record = Record::with_capacity(columns.len());
            for column in columns {
                let node: Node = row.get(column).map_err(|e| {
                    MemgraphError::Decode(format!("column '{column}' is not a node: {e}"))
                })?;
                record.insert(column.to_string(), entity_from_node(&node));
            }
            records.push(record);
        }

        debug!(rows = records.len(), "Fetched rows");
        Ok(records)
    }
}

/// Copy a driver node into the store-neutral entity.
///
/// Properties that have no JSON form (temporal and spatial values) are
/// skipped; the projection only reads `name`.
fn entity_from_node(node: &Node) -> Entity {
    let mut properties = serde_json::Map::new();
    for key in node.keys() {
        match node.get::<serde_json::Value>(key) {
            Ok(value) => {
                properties.insert(key.to_string(), value);
            }
            Err(e) => debug!(property = key, error = %e, "Skipping property"),
        }
    }

    Entity {
        id: node.id(),
        labels: node.labels().into_iter().map(str::to_string).collect(),
        properties,
    }
}

#[async_trait]
impl GraphStore for MemgraphClient {
    async fn reset(&self) -> StoreResult<()> {
        self.run(DROP_ALL).await?;
        Ok(())
    }

    async fn execute(&self, statement: &str) -> StoreResult<()> {
        self.run(statement).await?;
        Ok(())
    }

    async fn execute_and_fetch(&self, query: &str, columns: &[&str]) -> StoreResult<Vec<Record>> {
        Ok(self.fetch(query, columns).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.graph
            .run(query(PING))
            .await
            .map_err(|e| MemgraphError::Connection(e.to_string()))?;
        Ok(())
    }
}
