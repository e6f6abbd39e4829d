//! Memgraph backend for socialgraph
//!
//! Implements [`socialgraph_core::GraphStore`] over Bolt using `neo4rs`.
//!
//! ```rust,ignore
//! use socialgraph_config::StoreConfig;
//! use socialgraph_memgraph::MemgraphClient;
//!
//! let client = MemgraphClient::connect(&StoreConfig::default()).await?;
//! ```

pub mod client;
pub mod error;

pub use client::MemgraphClient;
pub use error::{MemgraphError, MemgraphResult};
