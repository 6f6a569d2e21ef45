//! Event payload types for session events.

use crate::language::Language;
use crate::state::{SessionState, Transition};

/// Payload for `on_session_started`.
#[derive(Debug, Clone)]
pub struct SessionStartedEvent {
    pub session_id: String,
    pub question_count: usize,
}

/// Payload for `on_session_finished`.
#[derive(Debug, Clone)]
pub struct SessionFinishedEvent {
    pub session_id: String,
    pub answered: usize,
    pub question_count: usize,
}

/// Payload for `on_session_reset`.
#[derive(Debug, Clone)]
pub struct SessionResetEvent {
    pub previous_session_id: String,
    pub session_id: String,
}

/// Payload for `on_answer_recorded`.
#[derive(Debug, Clone)]
pub struct AnswerRecordedEvent {
    pub session_id: String,
    pub index: usize,
    /// Whether the answer text differs from what was stored before.
    pub changed: bool,
}

/// Payload for `on_navigated`.
#[derive(Debug, Clone)]
pub struct NavigatedEvent {
    pub session_id: String,
    pub from: usize,
    pub to: usize,
}

/// Payload for `on_language_changed`.
#[derive(Debug, Clone)]
pub struct LanguageChangedEvent {
    pub session_id: String,
    pub from: Language,
    pub to: Language,
}

/// Payload for `on_transition_rejected`.
#[derive(Debug, Clone)]
pub struct TransitionRejectedEvent {
    pub session_id: String,
    pub transition: Transition,
    pub state: SessionState,
    pub reason: String,
}
