//! Error types for the load and query pipelines

use crate::store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while resetting the store and replaying a statement file
#[derive(Error, Debug)]
pub enum LoadError {
    /// The statement file could not be read
    #[error("Failed to read statement file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store refused to drop its existing content
    #[error("Failed to reset store: {0}")]
    Reset(#[source] StoreError),

    /// The store rejected a statement (1-based line number)
    #[error("Statement on line {line} failed: {source}")]
    Statement {
        line: usize,
        #[source]
        source: StoreError,
    },
}

/// Failure while fetching friendship rows
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Store query failed: {0}")]
    Store(#[from] StoreError),

    #[error("Row {row} has no '{column}' column")]
    MissingColumn { row: usize, column: &'static str },
}

/// Failure while turning rows into a graph
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("Row {row}: '{column}' entity has no string 'name' property")]
    MissingName { row: usize, column: &'static str },
}

/// Failure surfaced to the transport layer
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
