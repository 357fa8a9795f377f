//! Main application state container

use flashcards_questions::{NewQuestion, Question, QuestionFilter, QuestionStore};
use flashcards_storage::Database;

use crate::config::Config;
use crate::seed::example_questions;
use crate::{catalog, Result};

/// Owns the database handle and the question store built on it.
///
/// Constructed once at startup. Construction fails if the backing file
/// cannot be opened or its schema cannot be ensured; there is no lazily
/// initialized connection.
pub struct Flashcards {
    /// Configuration
    config: Config,
    /// Database
    db: Database,
    /// Question store
    questions: QuestionStore,
}

impl Flashcards {
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        let questions = QuestionStore::new(db.clone());
        Self {
            config,
            db,
            questions,
        }
    }

    /// Populate a new, empty database with the example questions.
    ///
    /// Only a file that had no recorded schema revision before this process
    /// opened it is seeded, so emptying the store later does not bring the
    /// examples back. Returns the number of questions inserted.
    pub fn initialize(&self) -> Result<usize> {
        let schema = self.db.schema();
        let mut seeded = 0;

        if self.config.seed_examples
            && schema.previous_version == 0
            && self.questions.count()? == 0
        {
            for example in example_questions() {
                self.questions.add(example)?;
                seeded += 1;
            }
            tracing::info!(count = seeded, "Seeded example questions");
        }

        tracing::info!(
            schema_version = schema.current_version,
            "Flashcards initialized"
        );

        Ok(seeded)
    }

    // === Boundary operations ===

    pub fn load_questions(&self) -> Result<Vec<Question>> {
        Ok(self.questions.load()?)
    }

    /// Validate the required text fields, then store the question.
    pub fn add_question(&self, candidate: NewQuestion) -> Result<Question> {
        candidate.validate()?;
        Ok(self.questions.add(candidate)?)
    }

    pub fn remove_question(&self, id: i64) -> Result<bool> {
        Ok(self.questions.remove(id)?)
    }

    // === Browsing helpers ===
    //
    // Library API for an embedding presentation layer (detail view, search
    // box, subject/topic pickers). The IPC host only exposes the three
    // operations above.

    /// Single question for a detail view.
    pub fn get_question(&self, id: i64) -> Result<Option<Question>> {
        Ok(self.questions.get(id)?)
    }

    /// Client-side filter over the full loaded set.
    pub fn search(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        Ok(filter.apply(self.questions.load()?))
    }

    /// Subjects in use, for a picker.
    pub fn subjects(&self) -> Result<Vec<String>> {
        Ok(catalog::subjects(&self.questions.load()?))
    }

    /// Topics in use, optionally within one subject, for a picker.
    pub fn topics(&self, subject: Option<&str>) -> Result<Vec<String>> {
        Ok(catalog::topics(&self.questions.load()?, subject))
    }
}

impl Clone for Flashcards {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            questions: self.questions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use flashcards_questions::QuestionError;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            database_path: PathBuf::from(":memory:"),
            seed_examples: false,
        }
    }

    fn in_memory(config: Config) -> Flashcards {
        Flashcards::with_database(config, Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_new_creates_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("nested").join("data"));
        let database_path = config.database_path.clone();

        let flashcards = Flashcards::new(config).unwrap();
        assert!(database_path.exists());
        assert!(flashcards.load_questions().unwrap().is_empty());
    }

    #[test]
    fn test_seeds_new_database_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf());

        let flashcards = Flashcards::new(config.clone()).unwrap();
        assert_eq!(flashcards.initialize().unwrap(), 2);
        let seeded = flashcards.load_questions().unwrap();
        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0].subject, "Analisi");

        for question in seeded {
            flashcards.remove_question(question.id).unwrap();
        }
        drop(flashcards);

        let reopened = Flashcards::new(config).unwrap();
        assert_eq!(reopened.initialize().unwrap(), 0);
        assert!(reopened.load_questions().unwrap().is_empty());
    }

    fn write_unversioned_file(path: &std::path::Path, rows: &str) {
        let conn = rusqlite::Connection::open(path).unwrap();
        conn.execute_batch(&format!(
            "CREATE TABLE questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                topic TEXT NOT NULL,
                subject TEXT NOT NULL
            );
            {rows}"
        ))
        .unwrap();
    }

    #[test]
    fn test_seeds_empty_unversioned_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf());
        write_unversioned_file(&config.database_path, "");

        let flashcards = Flashcards::new(config).unwrap();
        assert_eq!(flashcards.initialize().unwrap(), 2);
        assert_eq!(flashcards.load_questions().unwrap().len(), 2);
    }

    #[test]
    fn test_unversioned_file_with_rows_is_not_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf());
        write_unversioned_file(
            &config.database_path,
            "INSERT INTO questions (question, answer, topic, subject)
                 VALUES ('2+2?', '4', 'Arithmetic', 'Math');",
        );

        let flashcards = Flashcards::new(config).unwrap();
        assert_eq!(flashcards.initialize().unwrap(), 0);

        let questions = flashcards.load_questions().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "2+2?");
        assert!(questions[0].question_image_data.is_none());
    }

    #[test]
    fn test_seeding_can_be_disabled() {
        let flashcards = in_memory(test_config());
        assert_eq!(flashcards.initialize().unwrap(), 0);
        assert!(flashcards.load_questions().unwrap().is_empty());
    }

    #[test]
    fn test_add_question_keeps_whitespace_fields() {
        let flashcards = in_memory(test_config());

        let stored = flashcards
            .add_question(NewQuestion::new("2+2?", "4", " ", "Math"))
            .unwrap();
        assert_eq!(stored.topic, " ");
        assert_eq!(flashcards.load_questions().unwrap(), vec![stored]);
    }

    #[test]
    fn test_add_question_rejects_empty_fields() {
        let flashcards = in_memory(test_config());

        let result = flashcards.add_question(NewQuestion::new("2+2?", "", "Arithmetic", "Math"));
        assert!(matches!(
            result,
            Err(CoreError::Question(QuestionError::MissingField("answer")))
        ));
        assert!(flashcards.load_questions().unwrap().is_empty());
    }

    #[test]
    fn test_boundary_operations() {
        let flashcards = in_memory(test_config());

        let first = flashcards
            .add_question(NewQuestion::new("2+2?", "4", "Arithmetic", "Math"))
            .unwrap();
        let second = flashcards
            .add_question(NewQuestion::new("Capital of Italy?", "Rome", "Europe", "Geography"))
            .unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert_eq!(
            flashcards.get_question(first.id).unwrap().as_ref(),
            Some(&first)
        );

        assert!(flashcards.remove_question(first.id).unwrap());
        assert!(flashcards.remove_question(first.id).unwrap());
        assert_eq!(flashcards.load_questions().unwrap(), vec![second]);
    }

    #[test]
    fn test_search_and_catalogs() {
        let flashcards = in_memory(test_config());
        flashcards
            .add_question(NewQuestion::new("2+2?", "4", "Arithmetic", "Math"))
            .unwrap();
        flashcards
            .add_question(NewQuestion::new("d/dx x^2?", "2x", "Derivatives", "Math"))
            .unwrap();
        flashcards
            .add_question(NewQuestion::new("Capital of Italy?", "Rome", "Europe", "Geography"))
            .unwrap();

        let math = flashcards
            .search(&QuestionFilter::default().with_subject("Math"))
            .unwrap();
        assert_eq!(math.iter().map(|q| q.id).collect::<Vec<_>>(), vec![2, 1]);

        let rome = flashcards.search(&QuestionFilter::query("ROME")).unwrap();
        assert_eq!(rome.len(), 1);
        assert_eq!(rome[0].id, 3);

        assert_eq!(flashcards.subjects().unwrap(), vec!["Geography", "Math"]);
        assert_eq!(
            flashcards.topics(Some("Math")).unwrap(),
            vec!["Arithmetic", "Derivatives"]
        );
    }
}
