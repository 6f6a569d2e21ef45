//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Settings applied to every new session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Display language a session starts in. Default: `ja`.
    pub default_language: Option<String>,
}

impl SessionConfig {
    /// Returns the effective default language. Unknown codes fall back to
    /// the primary language; `CoachConfig::validate` rejects them earlier.
    pub fn effective_default_language(&self) -> Language {
        self.default_language
            .as_deref()
            .and_then(Language::parse_str)
            .unwrap_or(Language::PRIMARY)
    }
}
