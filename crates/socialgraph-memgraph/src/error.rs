//! Error types for the Memgraph backend

use socialgraph_core::StoreError;
use thiserror::Error;

/// Memgraph backend error type
#[derive(Error, Debug)]
pub enum MemgraphError {
    /// Driver configuration was rejected
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Could not reach or open the database
    #[error("Connection error: {0}")]
    Connection(String),

    /// A write statement failed
    #[error("Statement error: {0}")]
    Statement(String),

    /// A read query failed
    #[error("Query error: {0}")]
    Query(String),

    /// A returned value did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type for Memgraph operations
pub type MemgraphResult<T> = Result<T, MemgraphError>;

impl From<MemgraphError> for StoreError {
    fn from(err: MemgraphError) -> Self {
        match err {
            MemgraphError::Config(msg) => Self::Connection(format!("Invalid configuration: {msg}")),
            MemgraphError::Connection(msg) => Self::Connection(msg),
            MemgraphError::Statement(msg) => Self::Statement(msg),
            MemgraphError::Query(msg) => Self::Query(msg),
            MemgraphError::Decode(msg) => Self::Decode(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_surface_as_connection_failures() {
        let err: StoreError = MemgraphError::Config("missing uri".to_string()).into();
        assert!(matches!(err, StoreError::Connection(msg) if msg.contains("missing uri")));
    }

    #[test]
    fn test_statement_and_query_errors_keep_their_kind() {
        let err: StoreError = MemgraphError::Statement("syntax".to_string()).into();
        assert!(matches!(err, StoreError::Statement(_)));

        let err: StoreError = MemgraphError::Query("timeout".to_string()).into();
        assert!(matches!(err, StoreError::Query(_)));

        let err: StoreError = MemgraphError::Decode("not a node".to_string()).into();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
