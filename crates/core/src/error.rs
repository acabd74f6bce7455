//! Data-access error model.

use thiserror::Error;

/// Result type used across the data-access boundary.
pub type DataResult<T> = Result<T, DataError>;

/// Error returned by a [`crate::CustomerStore`] operation.
///
/// The HTTP layer maps each variant exhaustively: `NotFound` → 404,
/// `Rejected` → 400, `Storage` → 500 (logged, body kept generic).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    /// No record exists for the requested identifier.
    #[error("no customer with that id")]
    NotFound,

    /// The store refused the record (bad payload, conflicting id, ...).
    #[error("{0}")]
    Rejected(String),

    /// The store itself failed. Details are for the server log only.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DataError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
