//! Shared router state

use socialgraph_core::GraphService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub graph: GraphService,
}

impl AppState {
    pub fn new(graph: GraphService) -> Self {
        Self { graph }
    }
}
