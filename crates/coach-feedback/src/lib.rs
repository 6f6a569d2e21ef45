//! # coach-feedback
//!
//! Keyword rule sets and the deterministic feedback engine.
//!
//! Feedback is chosen by which keywords appear in the *question* text, never
//! by the answer. The first rule with any matching keyword wins; otherwise
//! the rule set's default applies. Every lookup falls back to the primary
//! language when the requested one is missing.

pub mod engine;
pub mod rules;

pub use engine::{match_feedback, FeedbackByLanguage, FeedbackEngine};
pub use rules::{LocalizedText, Rule, RuleLoader, RuleSet};
