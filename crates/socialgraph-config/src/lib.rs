//! # socialgraph configuration
//!
//! Typed configuration for the socialgraph service, loaded from an optional
//! TOML file and overridden by the `MEMGRAPH_*` environment variables.
//!
//! ```toml
//! [store]
//! host = "memgraph"
//! port = 7687
//!
//! [web]
//! port = 5000
//! static_dir = "public"
//! template_dir = "public/template"
//!
//! [data]
//! input_file = "data/graph.cypherl"
//! on_error = "stop"
//! ```

#![warn(clippy::all)]

mod config;
mod error;
mod loader;

pub use config::*;
pub use error::*;
pub use loader::*;
