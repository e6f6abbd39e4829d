//! HTTP interface for socialgraph
//!
//! Serves `/get-graph`, the landing page and static assets, and health probes.

pub mod routes;
pub mod server;

mod assets;
mod error;
mod state;

pub use error::{Result, WebError};
pub use server::{app, start_server};
pub use socialgraph_config::WebConfig;
pub use state::AppState;
