//! socialgraph binary library
//!
//! Startup order: parse → config → logging → connect → one-time load →
//! bind and serve. A failed load is logged and the server still starts on
//! whatever the store holds.

pub mod cli;
pub mod logging;

use anyhow::{Context, Result};
use socialgraph_config::{AppConfig, OnStatementError};
use socialgraph_core::{GraphService, LoadPolicy};
use socialgraph_memgraph::MemgraphClient;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::cli::Cli;

/// Resolve configuration: defaults < file < env < args
pub fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);
    Ok(config)
}

pub fn load_policy(on_error: OnStatementError) -> LoadPolicy {
    match on_error {
        OnStatementError::Stop => LoadPolicy::Stop,
        OnStatementError::Continue => LoadPolicy::Continue,
    }
}

/// Close the one-time startup phase, loading `input_file` unless `no_load`.
///
/// Either way the service reports ready afterwards.
pub async fn startup_phase(graph: &GraphService, no_load: bool, input_file: &Path) {
    if no_load {
        info!("Startup load skipped due to --no-load flag");
        graph.skip_initialize();
    } else {
        graph.initialize(input_file).await;
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    logging::init(&config.logging);

    let client = MemgraphClient::connect(&config.store)
        .await
        .with_context(|| format!("Failed to connect to Memgraph at {}", config.store.bolt_uri()))?;
    info!(uri = %client.uri(), "Connected to Memgraph");

    let graph = GraphService::new(Arc::new(client), load_policy(config.data.on_error));

    startup_phase(&graph, cli.no_load, &config.data.input_file).await;

    socialgraph_web::start_server(&config.web, graph)
        .await
        .context("Web server failed")?;
    Ok(())
}
