//! Web error type and its HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use socialgraph_core::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Graph error: {0}")]
    Graph(#[from] ServiceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WebError>;

impl IntoResponse for WebError {
    /// Clients only ever see the status; causes stay in the server log.
    fn into_response(self) -> Response {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
