//! Per-language text with primary-language fallback.

use std::collections::BTreeMap;

use coach_core::Language;

/// Text keyed by language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    entries: BTreeMap<Language, String>,
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.entries.insert(language, text.into());
        self
    }

    pub fn insert(&mut self, language: Language, text: impl Into<String>) {
        self.entries.insert(language, text.into());
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, language: Language) -> Option<&str> {
        self.entries.get(&language).map(String::as_str)
    }

    /// Lookup falling back to the primary language.
    pub fn resolve(&self, language: Language) -> Option<&str> {
        self.get(language).or_else(|| self.get(Language::PRIMARY))
    }

    pub fn contains(&self, language: Language) -> bool {
        self.entries.contains_key(&language)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.entries.keys().copied()
    }

    /// Build from raw code→text pairs. Unknown codes are skipped with a
    /// warning; `context` names the record for the log line.
    pub(crate) fn from_codes(raw: &BTreeMap<String, String>, context: &str) -> Self {
        let mut text = Self::new();
        for (code, value) in raw {
            match Language::parse_str(code) {
                Some(language) => text.insert(language, value.clone()),
                None => {
                    tracing::warn!(code = %code, record = context, "ignoring unsupported language code");
                }
            }
        }
        text
    }
}

impl FromIterator<(Language, String)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (Language, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
