//! Question records

use serde::{Deserialize, Serialize};

use crate::error::QuestionError;
use crate::Result;

/// A stored question. `id` is assigned by the store and never changes.
///
/// Text fields are opaque to storage; they may carry HTML fragments and
/// `\( ... \)` math spans for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub topic: String,
    pub subject: String,
    #[serde(default)]
    pub question_image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub question_image_mime: Option<String>,
    #[serde(default)]
    pub answer_image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub answer_image_mime: Option<String>,
}

/// A question that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub topic: String,
    pub subject: String,
    #[serde(default)]
    pub question_image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub question_image_mime: Option<String>,
    #[serde(default)]
    pub answer_image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub answer_image_mime: Option<String>,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        topic: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            topic: topic.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_question_image(mut self, data: Vec<u8>, mime: impl Into<String>) -> Self {
        self.question_image_data = Some(data);
        self.question_image_mime = Some(mime.into());
        self
    }

    pub fn with_answer_image(mut self, data: Vec<u8>, mime: impl Into<String>) -> Self {
        self.answer_image_data = Some(data);
        self.answer_image_mime = Some(mime.into());
        self
    }

    /// Check the form-level precondition: all four text fields non-empty.
    ///
    /// Whitespace counts as content; only a zero-length field is missing.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("question", &self.question),
            ("answer", &self.answer),
            ("topic", &self.topic),
            ("subject", &self.subject),
        ];

        for (name, value) in fields {
            if value.is_empty() {
                return Err(QuestionError::MissingField(name));
            }
        }
        Ok(())
    }

    /// Attach the id the store assigned.
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            topic: self.topic,
            subject: self.subject,
            question_image_data: self.question_image_data,
            question_image_mime: self.question_image_mime,
            answer_image_data: self.answer_image_data,
            answer_image_mime: self.answer_image_mime,
        }
    }
}
