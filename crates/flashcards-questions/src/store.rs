//! Question persistence

use rusqlite::{OptionalExtension, Row};

use crate::question::{NewQuestion, Question};
use crate::Result;
use flashcards_storage::Database;

const QUESTION_COLUMNS: &str = "id, question, answer, topic, subject, \
     question_image_data, question_image_mime, answer_image_data, answer_image_mime";

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        topic: row.get(3)?,
        subject: row.get(4)?,
        question_image_data: row.get(5)?,
        question_image_mime: row.get(6)?,
        answer_image_data: row.get(7)?,
        answer_image_mime: row.get(8)?,
    })
}

/// Sole reader and writer of question rows.
///
/// Records are only ever inserted or deleted. Each call is its own implicit
/// transaction and nothing is retried.
pub struct QuestionStore {
    db: Database,
}

impl QuestionStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// All questions, newest id first. An empty store yields an empty list.
    pub fn load(&self) -> Result<Vec<Question>> {
        Ok(self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id DESC"
            ))?;

            let questions = stmt
                .query_map([], question_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(questions)
        })?)
    }

    /// Insert a question and return it with its assigned id.
    ///
    /// The candidate is stored as given; required-field checks belong to the
    /// caller (see [`NewQuestion::validate`]). Image bytes are kept verbatim.
    pub fn add(&self, candidate: NewQuestion) -> Result<Question> {
        let id = self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO questions (
                     question, answer, topic, subject,
                     question_image_data, question_image_mime,
                     answer_image_data, answer_image_mime
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![
                    candidate.question,
                    candidate.answer,
                    candidate.topic,
                    candidate.subject,
                    candidate.question_image_data,
                    candidate.question_image_mime,
                    candidate.answer_image_data,
                    candidate.answer_image_mime,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        tracing::debug!(
            question_id = id,
            subject = %candidate.subject,
            topic = %candidate.topic,
            "Added question"
        );

        Ok(candidate.into_question(id))
    }

    /// Delete a question by id. Deleting an id that is not stored still
    /// succeeds.
    pub fn remove(&self, id: i64) -> Result<bool> {
        let affected = self.db.with_connection(|conn| {
            Ok(conn.execute("DELETE FROM questions WHERE id = ?1", [id])?)
        })?;

        tracing::debug!(question_id = id, affected, "Removed question");

        Ok(true)
    }

    pub fn get(&self, id: i64) -> Result<Option<Question>> {
        Ok(self.db.with_connection(|conn| {
            let question = conn
                .query_row(
                    &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
                    [id],
                    question_from_row,
                )
                .optional()?;
            Ok(question)
        })?)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.db.with_connection(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM questions", [], |row| {
                row.get(0)
            })?;
            Ok(count as usize)
        })?)
    }
}

impl Clone for QuestionStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
