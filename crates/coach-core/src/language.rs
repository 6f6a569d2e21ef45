//! Supported display and feedback languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported language code.
///
/// `Ja` is the primary language: question matching is keyed on the Japanese
/// question text, and every feedback lookup falls back to the Japanese entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    /// Every supported language, primary first.
    pub const ALL: [Language; 2] = [Language::Ja, Language::En];

    /// The canonical language for question matching and feedback fallback.
    pub const PRIMARY: Language = Language::Ja;

    /// The second language every question is also written in.
    pub const SECONDARY: Language = Language::En;

    /// Lowercase language code, as used in catalog and rule files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// Parse a language code. Codes are case-sensitive.
    pub fn parse_str(code: &str) -> Option<Self> {
        match code {
            "ja" => Some(Self::Ja),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
