//! Flashcards Core
//!
//! Central coordination layer. Owns the one database handle for the process
//! and everything built on it; the presentation layer holds no state of its
//! own beyond what it loads through here.

mod catalog;
mod config;
mod error;
mod flashcards;
mod seed;

pub use catalog::{labels, subjects, topics};
pub use config::Config;
pub use error::CoreError;
pub use flashcards::Flashcards;

// Re-export core components
pub use flashcards_questions::{
    NewQuestion, Question, QuestionError, QuestionFilter, QuestionStore,
};
pub use flashcards_storage::{Database, SchemaReport, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Output goes to stderr; stdout is reserved for the IPC channel.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
