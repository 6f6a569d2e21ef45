//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::SessionEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn SessionEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn SessionEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!(event = event_name, "session event handler panicked");
            }
        }
    }

    // ---- Session lifecycle ----
    pub fn emit_session_started(&self, event: &SessionStartedEvent) {
        self.emit("session_started", |h| h.on_session_started(event));
    }

    pub fn emit_session_finished(&self, event: &SessionFinishedEvent) {
        self.emit("session_finished", |h| h.on_session_finished(event));
    }

    pub fn emit_session_reset(&self, event: &SessionResetEvent) {
        self.emit("session_reset", |h| h.on_session_reset(event));
    }

    // ---- Per-question activity ----
    pub fn emit_answer_recorded(&self, event: &AnswerRecordedEvent) {
        self.emit("answer_recorded", |h| h.on_answer_recorded(event));
    }

    pub fn emit_navigated(&self, event: &NavigatedEvent) {
        self.emit("navigated", |h| h.on_navigated(event));
    }

    pub fn emit_language_changed(&self, event: &LanguageChangedEvent) {
        self.emit("language_changed", |h| h.on_language_changed(event));
    }

    // ---- Errors ----
    pub fn emit_transition_rejected(&self, event: &TransitionRejectedEvent) {
        self.emit("transition_rejected", |h| h.on_transition_rejected(event));
    }
}
