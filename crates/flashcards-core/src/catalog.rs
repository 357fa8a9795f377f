use std::collections::BTreeSet;

use flashcards_questions::Question;

/// Sorted distinct labels, blanks dropped and whitespace trimmed.
pub fn labels<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut set = BTreeSet::new();
    for value in values {
        let value = value.trim();
        if !value.is_empty() {
            set.insert(value.to_string());
        }
    }
    set.into_iter().collect()
}

pub fn subjects(questions: &[Question]) -> Vec<String> {
    labels(questions.iter().map(|q| q.subject.as_str()))
}

/// Topics in use, optionally only those under one subject.
pub fn topics(questions: &[Question], subject: Option<&str>) -> Vec<String> {
    let subject = subject.map(str::trim).filter(|s| !s.is_empty());
    labels(
        questions
            .iter()
            .filter(|q| subject.map_or(true, |s| q.subject.trim() == s))
            .map(|q| q.topic.as_str()),
    )
}
