//! Validated, immutable rule sets.

use coach_core::{ConfigurationError, Language};

use super::definition::RuleFileDef;
use super::localized::LocalizedText;

/// A keyword rule. Matches a question when any keyword is a case-sensitive
/// substring of the question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub keywords: Vec<String>,
    pub feedback: LocalizedText,
}

impl Rule {
    pub fn new<K, S>(keywords: K, feedback: LocalizedText) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            feedback,
        }
    }

    /// Exact substring containment, no tokenization or normalization.
    pub fn matches(&self, question_text: &str) -> bool {
        self.keywords.iter().any(|k| question_text.contains(k.as_str()))
    }
}

/// Ordered rules plus a default. The default always has a primary-language
/// entry, so every lookup against a `RuleSet` yields some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
    default_feedback: LocalizedText,
}

impl RuleSet {
    /// Build a rule set, rejecting a default that cannot serve as fallback.
    pub fn new(
        rules: Vec<Rule>,
        default_feedback: LocalizedText,
    ) -> Result<Self, ConfigurationError> {
        if default_feedback.is_empty() {
            return Err(ConfigurationError::EmptyDefaultFeedback);
        }
        if !default_feedback.contains(Language::PRIMARY) {
            return Err(ConfigurationError::MissingBaseLanguage {
                language: Language::PRIMARY,
            });
        }
        Ok(Self {
            rules,
            default_feedback,
        })
    }

    /// Validate a parsed rule file.
    pub fn from_definition(def: RuleFileDef) -> Result<Self, ConfigurationError> {
        let raw_default = def
            .default
            .and_then(|d| d.feedback)
            .ok_or(ConfigurationError::MissingDefaultFeedback)?;
        if raw_default.is_empty() {
            return Err(ConfigurationError::EmptyDefaultFeedback);
        }
        let default_feedback = LocalizedText::from_codes(&raw_default, "default");

        let rules = def
            .rules
            .iter()
            .enumerate()
            .map(|(i, r)| Rule {
                keywords: r.keywords.clone(),
                feedback: LocalizedText::from_codes(&r.feedback, &format!("rules[{i}]")),
            })
            .collect();

        Self::new(rules, default_feedback)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn default_feedback(&self) -> &LocalizedText {
        &self.default_feedback
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
