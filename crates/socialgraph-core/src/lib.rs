//! Core pipeline for socialgraph
//!
//! - [`loader`]: reset the store and replay a statement file against it
//! - [`query`]: fetch friendship rows, capped at [`query::ROW_LIMIT`]
//! - [`projector`]: deduplicate rows into a node/link [`Graph`]
//! - [`service`]: the two operations the web layer calls
//!
//! The store itself sits behind the [`GraphStore`] trait.

pub mod error;
pub mod graph;
pub mod loader;
pub mod projector;
pub mod query;
pub mod service;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
mod memory;

pub use error::{LoadError, ProjectionError, QueryError, ServiceError, ServiceResult};
pub use graph::{Graph, Link, Node, NodeId};
pub use loader::{LoadPolicy, LoadReport, StatementLoader};
pub use projector::project;
pub use query::{fetch_friend_edges, RawRow, FRIEND_EDGES_QUERY, ROW_LIMIT};
pub use service::GraphService;
pub use store::{Entity, GraphStore, Record, StoreError, StoreResult};

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
