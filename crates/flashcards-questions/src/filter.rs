//! Client-side filtering over a loaded question set

use serde::{Deserialize, Serialize};

use crate::question::Question;

/// Narrows a loaded list of questions.
///
/// `query` matches case-insensitively anywhere in the question or answer
/// text. `subject` and `topic`, when set, must match the label exactly
/// (surrounding whitespace ignored). Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

impl QuestionFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn matches(&self, question: &Question) -> bool {
        let query = self.query.trim().to_lowercase();
        self.matches_normalized(&query, question)
    }

    /// Keep the matching questions, preserving their order.
    pub fn apply(&self, questions: Vec<Question>) -> Vec<Question> {
        let query = self.query.trim().to_lowercase();
        questions
            .into_iter()
            .filter(|q| self.matches_normalized(&query, q))
            .collect()
    }

    fn matches_normalized(&self, query: &str, question: &Question) -> bool {
        if !label_matches(self.subject.as_deref(), &question.subject) {
            return false;
        }
        if !label_matches(self.topic.as_deref(), &question.topic) {
            return false;
        }

        query.is_empty()
            || question.question.to_lowercase().contains(query)
            || question.answer.to_lowercase().contains(query)
    }
}

fn label_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted.map(str::trim).filter(|s| !s.is_empty()) {
        Some(wanted) => wanted == actual.trim(),
        None => true,
    }
}
