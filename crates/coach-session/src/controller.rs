//! SessionController — applies transitions to an owned `QASession`.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use coach_core::events::{
    AnswerRecordedEvent, EventDispatcher, LanguageChangedEvent, NavigatedEvent,
    SessionEventHandler, SessionFinishedEvent, SessionResetEvent, SessionStartedEvent,
    TransitionRejectedEvent,
};
use coach_core::{
    CoachConfig, CoachResult, InvalidTransitionError, Language, SessionState, Transition,
};
use coach_feedback::{FeedbackByLanguage, FeedbackEngine, RuleLoader};

use crate::catalog::{Catalog, CatalogLoader};
use crate::export::SessionExport;
use crate::ids::{SessionIdSource, TimestampIdSource};
use crate::item::QuestionItem;
use crate::session::{Progress, QASession};

/// Drives one session through its lifecycle.
///
/// Every transition either applies completely or returns an
/// `InvalidTransitionError` and leaves the session untouched.
pub struct SessionController {
    catalog: Catalog,
    engine: FeedbackEngine,
    default_language: Language,
    ids: Box<dyn SessionIdSource>,
    events: EventDispatcher,
    session: QASession,
}

/// Builder for `SessionController`.
pub struct SessionControllerBuilder {
    catalog: Catalog,
    engine: FeedbackEngine,
    default_language: Language,
    ids: Box<dyn SessionIdSource>,
    events: EventDispatcher,
}

impl SessionControllerBuilder {
    /// Display language for new sessions, including those created by reset.
    pub fn language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub fn id_source(mut self, ids: impl SessionIdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn handler(mut self, handler: Arc<dyn SessionEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    pub fn build(self) -> SessionController {
        let Self {
            catalog,
            engine,
            default_language,
            mut ids,
            events,
        } = self;
        let session = new_session(&catalog, default_language, ids.as_mut());
        tracing::info!(
            session_id = session.session_id(),
            questions = session.len(),
            "session started"
        );
        events.emit_session_started(&SessionStartedEvent {
            session_id: session.session_id().to_string(),
            question_count: session.len(),
        });
        SessionController {
            catalog,
            engine,
            default_language,
            ids,
            events,
            session,
        }
    }
}

fn new_session(catalog: &Catalog, language: Language, ids: &mut dyn SessionIdSource) -> QASession {
    let created_at = Utc::now();
    let session_id = ids.next_id(created_at);
    QASession::new(catalog, language, session_id, created_at)
}

impl SessionController {
    /// Controller with the primary display language, timestamp ids, and no
    /// event handlers.
    pub fn new(catalog: Catalog, engine: FeedbackEngine) -> Self {
        Self::builder(catalog, engine).build()
    }

    pub fn builder(catalog: Catalog, engine: FeedbackEngine) -> SessionControllerBuilder {
        SessionControllerBuilder {
            catalog,
            engine,
            default_language: Language::PRIMARY,
            ids: Box::new(TimestampIdSource),
            events: EventDispatcher::new(),
        }
    }

    /// Load the catalog and rule files named by `config` (relative paths
    /// resolve against `root`) and start a session.
    pub fn from_config(root: &Path, config: &CoachConfig) -> CoachResult<Self> {
        CoachConfig::validate(config)?;
        let catalog = CatalogLoader::load_from_file(&config.content.effective_catalog_path(root))?;
        let rules = RuleLoader::load_from_file(&config.content.effective_rules_path(root))?;
        Ok(Self::builder(catalog, FeedbackEngine::new(rules))
            .language(config.session.effective_default_language())
            .build())
    }

    // ---- Read surface ----

    pub fn session(&self) -> &QASession {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &FeedbackEngine {
        &self.engine
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn position(&self) -> usize {
        self.session.position()
    }

    pub fn language(&self) -> Language {
        self.session.language()
    }

    pub fn session_id(&self) -> &str {
        self.session.session_id()
    }

    pub fn progress(&self) -> Progress {
        self.session.progress()
    }

    pub fn current_item(&self) -> Option<&QuestionItem> {
        self.session.current_item()
    }

    /// Current question in the display language; `None` on the summary.
    pub fn current_question(&self) -> Option<&str> {
        self.current_item().map(|i| i.question(self.language()))
    }

    /// Feedback for the current question in every language.
    pub fn current_feedback(&self) -> Option<&FeedbackByLanguage> {
        self.current_item().map(QuestionItem::feedback_all)
    }

    // ---- Transitions ----

    /// Store `text` as the current answer and recompute its feedback for
    /// every language, keyed by the primary-language question text.
    pub fn record_answer(&mut self, text: impl Into<String>) -> Result<(), InvalidTransitionError> {
        let text = text.into();
        let session_id = self.session.session_id().to_string();
        // Only the summary position has no item.
        let index = self.session.position();
        let Some(item) = self.session.item_mut(index) else {
            return Err(self.reject(Transition::RecordAnswer, "the session is already finished"));
        };

        let feedback = self.engine.evaluate_all(item.question_primary());
        let changed = item.answer() != text;
        item.record(text, feedback);

        tracing::debug!(session_id = %session_id, index, changed, "answer recorded");
        self.events.emit_answer_recorded(&AnswerRecordedEvent {
            session_id,
            index,
            changed,
        });
        Ok(())
    }

    /// Move to the following question. Blocked on the last question, where
    /// only `finish` moves forward.
    pub fn next(&mut self) -> Result<(), InvalidTransitionError> {
        match self.state() {
            SessionState::Active(i) if i + 1 < self.session.len() => {
                self.move_to(i, i + 1);
                Ok(())
            }
            SessionState::Active(_) => {
                Err(self.reject(Transition::Next, "already on the last question; use finish"))
            }
            SessionState::Summary => {
                Err(self.reject(Transition::Next, "the session is already finished"))
            }
        }
    }

    /// Move to the preceding question. Its stored answer and feedback stay.
    pub fn prev(&mut self) -> Result<(), InvalidTransitionError> {
        match self.state() {
            SessionState::Active(i) if i > 0 => {
                self.move_to(i, i - 1);
                Ok(())
            }
            SessionState::Active(_) => {
                Err(self.reject(Transition::Prev, "already on the first question"))
            }
            SessionState::Summary => {
                Err(self.reject(Transition::Prev, "the session is already finished"))
            }
        }
    }

    /// Enter the summary. Only allowed on the last question; answers may be
    /// blank.
    pub fn finish(&mut self) -> Result<(), InvalidTransitionError> {
        let last = self.session.len() - 1;
        match self.state() {
            SessionState::Active(i) if i == last => {
                self.session.set_position(self.session.len());
                let answered = self.session.answered_count();
                tracing::info!(
                    session_id = self.session.session_id(),
                    answered,
                    questions = self.session.len(),
                    "session finished"
                );
                self.events.emit_session_finished(&SessionFinishedEvent {
                    session_id: self.session.session_id().to_string(),
                    answered,
                    question_count: self.session.len(),
                });
                Ok(())
            }
            SessionState::Active(_) => Err(self.reject(
                Transition::Finish,
                "every question must be visited before finishing",
            )),
            SessionState::Summary => {
                Err(self.reject(Transition::Finish, "the session is already finished"))
            }
        }
    }

    /// Discard every answer and start over with a new session id.
    pub fn reset(&mut self) {
        let previous_session_id = self.session.session_id().to_string();
        self.session = new_session(&self.catalog, self.default_language, self.ids.as_mut());
        tracing::info!(
            previous_session_id = %previous_session_id,
            session_id = self.session.session_id(),
            "session reset"
        );
        self.events.emit_session_reset(&SessionResetEvent {
            previous_session_id,
            session_id: self.session.session_id().to_string(),
        });
    }

    /// Change the display language. Stored answers and feedback are
    /// unaffected.
    pub fn set_language(&mut self, language: Language) {
        let from = self.session.language();
        if from == language {
            return;
        }
        self.session.set_language(language);
        tracing::debug!(session_id = self.session.session_id(), %from, to = %language, "language changed");
        self.events.emit_language_changed(&LanguageChangedEvent {
            session_id: self.session.session_id().to_string(),
            from,
            to: language,
        });
    }

    /// Records for the external formatter. Only available on the summary.
    pub fn export(&self) -> Result<SessionExport, InvalidTransitionError> {
        if !self.state().is_summary() {
            return Err(self.reject(Transition::Export, "the session is not finished yet"));
        }
        Ok(self.session.to_export())
    }

    fn move_to(&mut self, from: usize, to: usize) {
        self.session.set_position(to);
        tracing::debug!(session_id = self.session.session_id(), from, to, "navigated");
        self.events.emit_navigated(&NavigatedEvent {
            session_id: self.session.session_id().to_string(),
            from,
            to,
        });
    }

    /// Build the error for a rejected transition and report it.
    fn reject(&self, transition: Transition, reason: &str) -> InvalidTransitionError {
        let state = self.state();
        tracing::warn!(
            session_id = self.session.session_id(),
            %transition,
            %state,
            reason,
            "transition rejected"
        );
        self.events.emit_transition_rejected(&TransitionRejectedEvent {
            session_id: self.session.session_id().to_string(),
            transition,
            state,
            reason: reason.to_string(),
        });
        InvalidTransitionError::new(transition, state, reason)
    }
}
