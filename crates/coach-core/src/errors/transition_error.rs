//! Rejected session transitions.

use super::error_code::{self, CoachErrorCode};
use crate::state::{SessionState, Transition};

/// A transition was requested from a state that forbids it.
/// The session is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot {transition} while {state}: {reason}")]
pub struct InvalidTransitionError {
    pub transition: Transition,
    pub state: SessionState,
    pub reason: String,
}

impl InvalidTransitionError {
    pub fn new(transition: Transition, state: SessionState, reason: impl Into<String>) -> Self {
        Self {
            transition,
            state,
            reason: reason.into(),
        }
    }
}

impl CoachErrorCode for InvalidTransitionError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_TRANSITION
    }
}
