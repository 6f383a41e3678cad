use thiserror::Error;

use crate::record::Key;

/// Convenience alias for table-oriented results.
pub type TableResult<T> = Result<T, TableError>;

/// Errors reported by [`SearchTable`](crate::SearchTable) operations.
///
/// Both variants are ordinary outcomes; the table is left unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("record with key {0} already exists")]
    DuplicateKey(Key),

    #[error("no record with key {0}")]
    KeyNotFound(Key),
}

impl TableError {
    /// Returns the key the failed operation was called with.
    pub fn key(&self) -> Key {
        match self {
            TableError::DuplicateKey(key) | TableError::KeyNotFound(key) => *key,
        }
    }
}
