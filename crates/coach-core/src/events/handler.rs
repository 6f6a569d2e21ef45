//! SessionEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing session activity.
///
/// Handlers only override the events they care about. A presentation layer
/// typically registers one to redraw after each transition.
pub trait SessionEventHandler: Send + Sync {
    // ---- Session lifecycle ----
    fn on_session_started(&self, _event: &SessionStartedEvent) {}
    fn on_session_finished(&self, _event: &SessionFinishedEvent) {}
    fn on_session_reset(&self, _event: &SessionResetEvent) {}

    // ---- Per-question activity ----
    fn on_answer_recorded(&self, _event: &AnswerRecordedEvent) {}
    fn on_navigated(&self, _event: &NavigatedEvent) {}
    fn on_language_changed(&self, _event: &LanguageChangedEvent) {}

    // ---- Errors ----
    fn on_transition_rejected(&self, _event: &TransitionRejectedEvent) {}
}
