//! Landing page and static files
//!
//! - `/` serves `index.html` from the template directory
//! - anything else unmatched is looked up in the static directory, which is
//!   mounted at the URL root

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

pub fn static_routes(static_dir: &Path, template_dir: &Path) -> Router {
    let index = template_dir.join("index.html");
    tracing::info!(
        static_dir = %static_dir.display(),
        index = %index.display(),
        "Serving static assets"
    );

    Router::new()
        .route_service("/", ServeFile::new(index))
        .fallback_service(ServeDir::new(static_dir))
}
