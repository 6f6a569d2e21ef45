//! FeedbackEngine — first-match keyword lookup over a `RuleSet`.

use std::collections::BTreeMap;
use std::sync::Arc;

use coach_core::Language;

use crate::rules::{Rule, RuleSet};

/// Feedback for every supported language.
pub type FeedbackByLanguage = BTreeMap<Language, String>;

/// Select feedback for `question_text` in `language`.
///
/// Rules are scanned in order and the first one with any keyword contained in
/// the question wins. Its feedback for `language` is returned, else its
/// primary-language entry, else the empty string. With no matching rule the
/// rule set's default is used with the same fallback.
pub fn match_feedback<'a>(question_text: &str, rules: &'a RuleSet, language: Language) -> &'a str {
    match rules.rules().iter().find(|r| r.matches(question_text)) {
        Some(rule) => rule.feedback.resolve(language).unwrap_or(""),
        None => rules.default_feedback().resolve(language).unwrap_or(""),
    }
}

/// Stateless feedback engine over a shared, immutable rule set.
///
/// Cloning is cheap; clones share the same rules.
#[derive(Debug, Clone)]
pub struct FeedbackEngine {
    rules: Arc<RuleSet>,
}

impl FeedbackEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    pub fn from_shared(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Feedback for one language.
    pub fn evaluate(&self, question_text: &str, language: Language) -> String {
        match_feedback(question_text, &self.rules, language).to_string()
    }

    /// Feedback for every supported language.
    pub fn evaluate_all(&self, question_text: &str) -> FeedbackByLanguage {
        Language::ALL
            .iter()
            .map(|&language| (language, self.evaluate(question_text, language)))
            .collect()
    }

    /// The first matching rule and its position, or `None` when the default
    /// applies.
    pub fn matching_rule(&self, question_text: &str) -> Option<(usize, &Rule)> {
        self.rules
            .rules()
            .iter()
            .enumerate()
            .find(|(_, r)| r.matches(question_text))
    }
}
