//! Friendship graph endpoint

use crate::state::AppState;
use crate::WebError;
use axum::{extract::State, routing::get, Json, Router};
use socialgraph_core::Graph;

pub fn graph_routes() -> Router<AppState> {
    Router::new().route("/get-graph", get(get_graph))
}

/// Friendship graph for the visualization; any failure is a bare 500
async fn get_graph(State(state): State<AppState>) -> Result<Json<Graph>, WebError> {
    let graph = state.graph.get_graph().await?;
    Ok(Json(graph))
}
