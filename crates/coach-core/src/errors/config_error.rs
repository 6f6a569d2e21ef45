//! Configuration errors: settings files and feedback rule sets.

use super::error_code::{self, CoachErrorCode};
use crate::language::Language;

/// Errors raised while loading settings or building a rule set.
/// All of them are fatal at load time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Rule set has no default feedback")]
    MissingDefaultFeedback,

    #[error("Rule set default feedback is empty")]
    EmptyDefaultFeedback,

    #[error("Rule set default feedback has no entry for base language '{language}'")]
    MissingBaseLanguage { language: Language },
}

impl CoachErrorCode for ConfigurationError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
