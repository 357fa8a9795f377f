//! Storage error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing file could not be opened or its schema could not be ensured.
    #[error("Database initialization failed: {0}")]
    Initialization(#[source] rusqlite::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
