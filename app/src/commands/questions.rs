//! Question commands
use flashcards_core::{NewQuestion, Question};

use super::CommandResult;
use crate::state::AppState;

/// `load-questions`: every stored question, newest first.
pub fn load_questions(state: &AppState) -> CommandResult<Vec<Question>> {
    match state.with_flashcards(|flashcards| flashcards.load_questions()) {
        Ok(questions) => CommandResult::ok(questions),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load questions");
            CommandResult::err(e.to_string())
        }
    }
}

/// `add-question`: store a question and return it with its assigned id.
pub fn add_question(state: &AppState, question: NewQuestion) -> CommandResult<Question> {
    match state.with_flashcards(|flashcards| flashcards.add_question(question)) {
        Ok(question) => CommandResult::ok(question),
        Err(e) => {
            tracing::error!(error = %e, "Failed to add question");
            CommandResult::err(e.to_string())
        }
    }
}

/// `remove-question`: delete by id. Unknown ids still report success.
pub fn remove_question(state: &AppState, id: i64) -> CommandResult<bool> {
    match state.with_flashcards(|flashcards| flashcards.remove_question(id)) {
        Ok(removed) => CommandResult::ok(removed),
        Err(e) => {
            tracing::error!(question_id = id, error = %e, "Failed to remove question");
            CommandResult::err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcards_core::{Config, Database, Flashcards};
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            database_path: PathBuf::from(":memory:"),
            seed_examples: false,
        }
    }

    fn test_state() -> (AppState, Database) {
        let db = Database::open_in_memory().unwrap();
        let flashcards = Flashcards::with_database(test_config(), db.clone());
        (AppState::from_flashcards(flashcards), db)
    }

    #[test]
    fn test_scenario() {
        let (state, _db) = test_state();

        let loaded = load_questions(&state);
        assert!(loaded.success);
        assert_eq!(loaded.data.unwrap().len(), 0);

        let first = add_question(&state, NewQuestion::new("2+2?", "4", "Arithmetic", "Math"));
        assert!(first.success);
        let first = first.data.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.question, "2+2?");

        let second = add_question(&state, NewQuestion::new("5-3?", "2", "Arithmetic", "Math"))
            .data
            .unwrap();
        assert_eq!(second.id, 2);

        let ids: Vec<i64> = load_questions(&state)
            .data
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);

        let removed = remove_question(&state, 1);
        assert!(removed.success);
        assert_eq!(removed.data, Some(true));

        let remaining = load_questions(&state).data.unwrap();
        assert_eq!(remaining, vec![second]);
    }

    #[test]
    fn test_remove_missing_id_succeeds() {
        let (state, _db) = test_state();
        let result = remove_question(&state, 404);
        assert!(result.success);
        assert_eq!(result.data, Some(true));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_invalid_candidate_is_reported() {
        let (state, _db) = test_state();
        let result = add_question(&state, NewQuestion::new("2+2?", "4", "", "Math"));

        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(result.error.unwrap().contains("topic"));
    }

    #[test]
    fn test_storage_errors_are_relayed() {
        let (state, db) = test_state();
        db.with_connection(|conn| {
            conn.execute_batch("DROP TABLE questions")?;
            Ok(())
        })
        .unwrap();

        let result = load_questions(&state);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("no such table"));

        let result = add_question(&state, NewQuestion::new("2+2?", "4", "Arithmetic", "Math"));
        assert!(!result.success);

        let result = remove_question(&state, 1);
        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(result.error.unwrap().contains("no such table"));
    }

    #[test]
    fn test_whitespace_fields_are_accepted() {
        let (state, _db) = test_state();

        let result = add_question(&state, NewQuestion::new("2+2?", "4", " ", "Math"));
        assert!(result.success);
        let stored = result.data.unwrap();
        assert_eq!(stored.topic, " ");
        assert_eq!(load_questions(&state).data.unwrap(), vec![stored]);
    }

    #[test]
    fn test_commands_fail_after_shutdown() {
        let (state, _db) = test_state();
        state.shutdown();

        let result = load_questions(&state);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Flashcards not initialized"));
    }
}
