//! Flat export records handed to an external CSV/JSON formatter.

use coach_core::constants::EXPORT_FILE_PREFIX;
use coach_core::Language;
use serde::Serialize;

use crate::item::QuestionItem;

/// One row of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    /// 1-based position in the catalog.
    pub index: usize,
    pub question_primary: String,
    pub question_secondary: String,
    pub answer: String,
    pub feedback_primary: String,
    pub feedback_secondary: String,
}

impl ExportRecord {
    pub fn from_item(index: usize, item: &QuestionItem) -> Self {
        Self {
            index,
            question_primary: item.question_primary().to_string(),
            question_secondary: item.question_secondary().to_string(),
            answer: item.answer().to_string(),
            feedback_primary: item.feedback(Language::PRIMARY).to_string(),
            feedback_secondary: item.feedback(Language::SECONDARY).to_string(),
        }
    }
}

/// Everything a formatter needs: the rows, in catalog order, and the id
/// that names the produced artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionExport {
    pub session_id: String,
    pub records: Vec<ExportRecord>,
}

impl SessionExport {
    /// Artifact name without extension: `profile_summary_<session_id>`.
    pub fn artifact_stem(&self) -> String {
        format!("{EXPORT_FILE_PREFIX}_{}", self.session_id)
    }
}
