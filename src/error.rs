//! Structured error types for storage operations.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    OpenFailed,
    PrepareFailed,
    ExecuteFailed,
    RowDecodeFailed,
    CloseFailed,
}

/// Failure of a single storage operation.
///
/// "Not found" is never an error: lookups return `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened (or created, for schema setup).
    #[error("can't open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("SQL error preparing statement: {0}")]
    Prepare(#[source] rusqlite::Error),

    /// Binding or stepping a statement failed.
    #[error("SQL error executing statement: {0}")]
    Execute(#[source] rusqlite::Error),

    #[error("SQL error reading row: {0}")]
    Row(#[source] rusqlite::Error),

    #[error("SQL error closing database: {0}")]
    Close(#[source] rusqlite::Error),
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Open { .. } => ErrorCode::OpenFailed,
            StoreError::Prepare(_) => ErrorCode::PrepareFailed,
            StoreError::Execute(_) => ErrorCode::ExecuteFailed,
            StoreError::Row(_) => ErrorCode::RowDecodeFailed,
            StoreError::Close(_) => ErrorCode::CloseFailed,
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
