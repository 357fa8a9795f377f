//! Database connection

use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

use crate::migrations::{ensure_schema, SchemaReport};
use crate::{Result, StorageError};

/// Shared handle to the backing file.
///
/// Cloning is cheap; every clone talks to the same connection. A `Database`
/// only exists once its schema has been ensured.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    schema: SchemaReport,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(StorageError::Initialization)?;

        // WAL mode for better concurrent performance
        let journal_mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(StorageError::Initialization)?;

        let schema = ensure_schema(&conn).map_err(StorageError::Initialization)?;

        tracing::info!(
            path = %path.display(),
            journal_mode = %journal_mode,
            schema_version = schema.current_version,
            "Opened database"
        );

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            schema,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::Initialization)?;
        let schema = ensure_schema(&conn).map_err(StorageError::Initialization)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            schema,
        })
    }

    /// What schema setup found and did when this handle was opened.
    pub fn schema(&self) -> SchemaReport {
        self.schema
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
            schema: self.schema,
        }
    }
}
