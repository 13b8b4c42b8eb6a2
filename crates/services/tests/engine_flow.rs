use crunch_core::model::{FACTOR_MAX, FACTOR_MIN, Notice, NoticeKind, Problem, Stats};
use crunch_core::{AnswerPolicy, FixedProblems, fixed_problems};
use services::{EngineConfig, SessionEngine, SubmitOutcome};

fn answer(engine: &mut SessionEngine, raw: &str) -> SubmitOutcome {
    engine.set_answer_text(raw);
    engine.submit_answer()
}

#[test]
fn seeded_engine_plays_a_full_round() {
    let mut engine = EngineConfig::default().with_seed(Some(2024)).build_engine();

    for round in 1..=12_u32 {
        let problem = engine.problem();
        assert!((FACTOR_MIN..=FACTOR_MAX).contains(&problem.a()));
        assert!((FACTOR_MIN..=FACTOR_MAX).contains(&problem.b()));

        // One miss, then the right answer, on every third problem.
        if round % 3 == 0 {
            let wrong = (problem.answer() + 1).to_string();
            assert_eq!(answer(&mut engine, &wrong), SubmitOutcome::Incorrect);
            assert_eq!(engine.problem(), problem);
        }
        let right = problem.answer().to_string();
        assert_eq!(answer(&mut engine, &right), SubmitOutcome::Correct);

        let stats = engine.stats();
        assert!(stats.best_streak >= stats.current_streak);
        assert_eq!(stats.correct_count, round);
    }

    let stats = engine.stats();
    assert_eq!(stats.incorrect_count, 4);
    assert_eq!(engine.total(), 16);
    assert!((engine.accuracy() - 0.75).abs() < 1e-12);
}

#[test]
fn milestone_notice_does_not_block_progress() {
    let mut engine = SessionEngine::new(Box::new(fixed_problems()), AnswerPolicy::Strict);

    for _ in 0..5 {
        let right = engine.problem().answer().to_string();
        assert_eq!(answer(&mut engine, &right), SubmitOutcome::Correct);
    }
    assert_eq!(*engine.notice(), Notice::Milestone { correct_count: 5 });

    // Answering straight away is allowed and replaces the milestone.
    let right = engine.problem().answer().to_string();
    assert_eq!(answer(&mut engine, &right), SubmitOutcome::Correct);
    assert_eq!(engine.notice().kind(), NoticeKind::None);
}

#[test]
fn validation_errors_never_touch_stats_or_problem() {
    let script = vec![Problem::new(6, 7).unwrap()];
    let mut engine = SessionEngine::new(
        Box::new(FixedProblems::new(script).unwrap()),
        AnswerPolicy::Strict,
    );
    let _ = answer(&mut engine, "42");
    let before = engine.stats();

    for (raw, expected) in [
        ("", SubmitOutcome::Empty),
        ("\t \n", SubmitOutcome::Empty),
        ("abc", SubmitOutcome::Invalid),
        ("4 2", SubmitOutcome::Invalid),
        ("42.0", SubmitOutcome::Invalid),
    ] {
        assert_eq!(answer(&mut engine, raw), expected, "input {raw:?}");
        assert_eq!(engine.notice().kind(), NoticeKind::ValidationError);
        assert_eq!(engine.stats(), before);
        assert_eq!(engine.answer_text(), "");
    }
}

#[test]
fn dismiss_notice_is_idempotent() {
    let mut engine = SessionEngine::new(Box::new(fixed_problems()), AnswerPolicy::Strict);
    let _ = answer(&mut engine, "nope");
    assert!(engine.notice().is_active());

    engine.dismiss_notice();
    let after_first = engine.state().clone();
    engine.dismiss_notice();

    assert_eq!(engine.state(), &after_first);
    assert_eq!(engine.notice().kind(), NoticeKind::None);
    assert_eq!(engine.stats(), Stats::default());
}

#[test]
fn snapshot_serializes_for_presentation() {
    let mut engine = SessionEngine::new(Box::new(fixed_problems()), AnswerPolicy::Permissive);
    let _ = answer(&mut engine, "12e0");
    engine.set_answer_text("5");

    let json = serde_json::to_value(engine.snapshot()).unwrap();

    assert_eq!(json["problem"], serde_json::json!({ "a": 7, "b": 8 }));
    assert_eq!(json["answer_text"], "5");
    assert_eq!(json["notice"], "none");
    assert_eq!(json["notice_message"], serde_json::Value::Null);
    assert_eq!(json["stats"]["correct_count"], 1);
    assert_eq!(json["total"], 1);
    assert_eq!(json["accuracy"], 1.0);
}
