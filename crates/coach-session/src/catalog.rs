//! Question catalog: the ordered, bilingual questions a session walks.

use std::path::Path;

use coach_core::{CatalogError, Language};
use serde_json::Value;

/// One question in both languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub primary: String,
    pub secondary: String,
}

impl CatalogEntry {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// A non-empty, ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loader for JSON catalogs: an array of `{"ja": ..., "en": ...}` records.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a JSON string.
    pub fn load_from_str(json: &str) -> Result<Catalog, CatalogError> {
        Self::parse(json, "<string>")
    }

    /// Load a catalog from a file path.
    pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|_| CatalogError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let catalog = Self::parse(&content, &path.display().to_string())?;
        tracing::info!(path = %path.display(), questions = catalog.len(), "question catalog loaded");
        Ok(catalog)
    }

    fn parse(json: &str, origin: &str) -> Result<Catalog, CatalogError> {
        let parse_error = |message: String| CatalogError::ParseError {
            path: origin.to_string(),
            message,
        };

        let value: Value = serde_json::from_str(json).map_err(|e| parse_error(e.to_string()))?;
        let records = value
            .as_array()
            .ok_or_else(|| parse_error("expected a JSON array of question records".to_string()))?;

        let entries = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let record_no = i + 1;
                Ok(CatalogEntry {
                    primary: required_text(record, Language::PRIMARY, record_no)?,
                    secondary: required_text(record, Language::SECONDARY, record_no)?,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Catalog::new(entries)
    }
}

fn required_text(
    record: &Value,
    language: Language,
    record_no: usize,
) -> Result<String, CatalogError> {
    record
        .get(language.as_str())
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| CatalogError::MissingField {
            record: record_no,
            field: language.as_str().to_string(),
        })
}
