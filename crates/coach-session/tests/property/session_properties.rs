use coach_core::{Language, SessionState};
use coach_feedback::{FeedbackEngine, LocalizedText, Rule, RuleSet};
use coach_session::{Catalog, CatalogEntry, SequentialIdSource, SessionController};
use proptest::prelude::*;

fn controller(n: usize) -> SessionController {
    let rules = RuleSet::new(
        vec![Rule::new(
            ["1"],
            LocalizedText::new()
                .with(Language::Ja, "one-ja")
                .with(Language::En, "one-en"),
        )],
        LocalizedText::new()
            .with(Language::Ja, "D")
            .with(Language::En, "E"),
    )
    .unwrap();
    let entries = (0..n)
        .map(|i| CatalogEntry::new(format!("Q{i}"), format!("質問{i}")))
        .collect();
    SessionController::builder(Catalog::new(entries).unwrap(), FeedbackEngine::new(rules))
        .id_source(SequentialIdSource::new("p"))
        .build()
}

#[derive(Debug, Clone)]
enum Op {
    Next,
    Prev,
    Finish,
    Answer(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        Just(Op::Finish),
        "[a-z ]{0,12}".prop_map(Op::Answer),
    ]
}

proptest! {
    #[test]
    fn re_recording_same_answer_leaves_feedback_unchanged(
        n in 1usize..6,
        answer in ".{0,40}",
    ) {
        let mut c = controller(n);
        c.record_answer(answer.clone()).unwrap();
        let before = c.current_item().unwrap().clone();
        c.record_answer(answer).unwrap();
        prop_assert_eq!(c.current_item().unwrap(), &before);
    }

    #[test]
    fn cursor_never_leaves_bounds(
        n in 1usize..6,
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let mut c = controller(n);
        for op in ops {
            let before = c.position();
            let was_summary = c.state().is_summary();
            let result = match op {
                Op::Next => c.next(),
                Op::Prev => c.prev(),
                Op::Finish => c.finish(),
                Op::Answer(text) => c.record_answer(text),
            };
            if result.is_err() {
                prop_assert_eq!(c.position(), before);
            }
            if was_summary {
                prop_assert!(c.state().is_summary());
            } else {
                prop_assert!(c.position() <= n);
            }
            if let SessionState::Active(i) = c.state() {
                prop_assert!(i < n);
            }
        }
    }

    #[test]
    fn finish_succeeds_exactly_on_last_question(n in 1usize..6, steps in 0usize..6) {
        let mut c = controller(n);
        for _ in 0..steps {
            let _ = c.next();
        }
        let at = c.position();
        let result = c.finish();
        if at == n - 1 {
            prop_assert!(result.is_ok());
            prop_assert_eq!(c.position(), n);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(c.position(), at);
        }
    }

    #[test]
    fn reset_always_returns_to_start_with_fresh_id(
        n in 1usize..6,
        ops in proptest::collection::vec(op(), 0..20),
    ) {
        let mut c = controller(n);
        for op in ops {
            let _ = match op {
                Op::Next => c.next(),
                Op::Prev => c.prev(),
                Op::Finish => c.finish(),
                Op::Answer(text) => c.record_answer(text),
            };
        }
        let before = c.session_id().to_string();
        c.reset();
        prop_assert_eq!(c.position(), 0);
        prop_assert_ne!(c.session_id(), before.as_str());
        prop_assert!(c.session().items().iter().all(|i| i.answer().is_empty()));
    }
}
