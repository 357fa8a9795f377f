//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] flashcards_storage::StorageError),

    #[error("Question error: {0}")]
    Question(#[from] flashcards_questions::QuestionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Flashcards not initialized")]
    NotInitialized,
}
