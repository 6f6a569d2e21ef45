//! A question together with the user's answer and its feedback.

use coach_core::Language;
use coach_feedback::FeedbackByLanguage;

use crate::catalog::CatalogEntry;

/// One question of a session.
///
/// Question texts never change. The answer is overwritten on each capture,
/// and feedback for every language is replaced in the same step, so it can
/// never lag behind the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionItem {
    question_primary: String,
    question_secondary: String,
    answer: String,
    feedback: FeedbackByLanguage,
}

impl QuestionItem {
    pub fn new(question_primary: impl Into<String>, question_secondary: impl Into<String>) -> Self {
        Self {
            question_primary: question_primary.into(),
            question_secondary: question_secondary.into(),
            answer: String::new(),
            feedback: FeedbackByLanguage::new(),
        }
    }

    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self::new(entry.primary.clone(), entry.secondary.clone())
    }

    pub fn question_primary(&self) -> &str {
        &self.question_primary
    }

    pub fn question_secondary(&self) -> &str {
        &self.question_secondary
    }

    /// Question text in a display language.
    pub fn question(&self, language: Language) -> &str {
        if language.is_primary() {
            &self.question_primary
        } else {
            &self.question_secondary
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Stored feedback for `language`; empty until an answer is recorded.
    pub fn feedback(&self, language: Language) -> &str {
        self.feedback.get(&language).map(String::as_str).unwrap_or("")
    }

    pub fn feedback_all(&self) -> &FeedbackByLanguage {
        &self.feedback
    }

    /// True once a non-blank answer is stored.
    pub fn is_answered(&self) -> bool {
        !self.answer.trim().is_empty()
    }

    /// Replace the answer and its feedback together.
    pub(crate) fn record(&mut self, answer: String, feedback: FeedbackByLanguage) {
        self.answer = answer;
        self.feedback = feedback;
    }
}
