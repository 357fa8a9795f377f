//! Flashcards Questions
//!
//! The question record and the store that owns it:
//! - `load` — every question, newest first
//! - `add` — insert and hand back the assigned id
//! - `remove` — delete by id; missing ids are not an error
//!
//! Filtering happens over the loaded set, see [`QuestionFilter`].

mod error;
mod filter;
mod question;
mod store;

pub use error::QuestionError;
pub use filter::QuestionFilter;
pub use question::{NewQuestion, Question};
pub use store::QuestionStore;

pub type Result<T> = std::result::Result<T, QuestionError>;
