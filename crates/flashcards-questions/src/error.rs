//! Question error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestionError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Storage error: {0}")]
    Storage(#[from] flashcards_storage::StorageError),
}

