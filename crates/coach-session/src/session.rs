//! QASession — the state of one walk-through.

use chrono::{DateTime, Utc};
use coach_core::{Language, SessionState};

use crate::catalog::Catalog;
use crate::export::{ExportRecord, SessionExport};
use crate::item::QuestionItem;

/// Cursor position against the total number of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// `position / total`, 0.0 for an empty session.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.position as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.total
    }
}

/// Items, cursor, display language, and identity of one session.
///
/// `position` ranges over `0..=items.len()`; `items.len()` is the summary.
/// Mutation goes through `SessionController`, which enforces the transition
/// rules.
#[derive(Debug, Clone)]
pub struct QASession {
    items: Vec<QuestionItem>,
    position: usize,
    language: Language,
    session_id: String,
    created_at: DateTime<Utc>,
}

impl QASession {
    /// Fresh session at the first question with no answers.
    pub fn new(
        catalog: &Catalog,
        language: Language,
        session_id: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            items: catalog.entries().iter().map(QuestionItem::from_entry).collect(),
            position: 0,
            language,
            session_id,
            created_at,
        }
    }

    pub fn items(&self) -> &[QuestionItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&QuestionItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> SessionState {
        if self.position < self.items.len() {
            SessionState::Active(self.position)
        } else {
            SessionState::Summary
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The item being answered; `None` on the summary.
    pub fn current_item(&self) -> Option<&QuestionItem> {
        self.items.get(self.position)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.position,
            total: self.items.len(),
        }
    }

    pub fn answered_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_answered()).count()
    }

    /// Flat records for every item in catalog order, regardless of state.
    pub fn export_records(&self) -> Vec<ExportRecord> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| ExportRecord::from_item(i + 1, item))
            .collect()
    }

    pub fn to_export(&self) -> SessionExport {
        SessionExport {
            session_id: self.session_id.clone(),
            records: self.export_records(),
        }
    }

    pub(crate) fn item_mut(&mut self, index: usize) -> Option<&mut QuestionItem> {
        self.items.get_mut(index)
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        debug_assert!(position <= self.items.len());
        self.position = position;
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
