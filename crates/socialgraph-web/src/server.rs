//! Router assembly and server startup

use crate::assets::static_routes;
use crate::routes::{graph_routes, health_routes};
use crate::state::AppState;
use crate::{Result, WebError};
use axum::Router;
use socialgraph_config::WebConfig;
use socialgraph_core::GraphService;
use tower_http::trace::TraceLayer;

/// Full application router: API routes first, static files as fallback
pub fn app(state: AppState, config: &WebConfig) -> Router {
    Router::new()
        .merge(graph_routes())
        .merge(health_routes())
        .with_state(state)
        .merge(static_routes(&config.static_dir, &config.template_dir))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl-C.
///
/// The startup load must already have run on `graph`; nothing here touches
/// the store before the first request.
pub async fn start_server(config: &WebConfig, graph: GraphService) -> Result<()> {
    let router = app(AppState::new(graph), config);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .map_err(|e| WebError::Config(format!("Cannot bind {}: {e}", config.bind_address())))?;

    let addr = listener.local_addr().map_err(WebError::Io)?;
    tracing::info!("Starting web server on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WebError::Io)?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
