//! Flashcards Storage Layer
//!
//! SQLite persistence for question records. One connection per process,
//! opened and schema-checked before any handle is handed out.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use migrations::{SchemaReport, QUESTIONS_TABLE, SCHEMA_VERSION};

pub type Result<T> = std::result::Result<T, StorageError>;
