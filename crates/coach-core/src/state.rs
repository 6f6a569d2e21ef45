//! Labels for session states and transitions, shared by the session crate
//! and the error types that report rejected transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a session's cursor currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Answering the question at this zero-based index.
    Active(usize),
    /// Cursor is past the last question. Left only by a reset.
    Summary,
}

impl SessionState {
    pub fn is_summary(&self) -> bool {
        matches!(self, Self::Summary)
    }

    /// Index of the question being answered, if any.
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Self::Active(i) => Some(*i),
            Self::Summary => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active(i) => write!(f, "answering question {}", i + 1),
            Self::Summary => f.write_str("viewing the summary"),
        }
    }
}

/// An operation a caller can request on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    RecordAnswer,
    Next,
    Prev,
    Finish,
    Reset,
    SetLanguage,
    Export,
}

impl Transition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecordAnswer => "record_answer",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Finish => "finish",
            Self::Reset => "reset",
            Self::SetLanguage => "set_language",
            Self::Export => "export",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
