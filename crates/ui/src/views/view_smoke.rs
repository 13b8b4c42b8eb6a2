use super::test_harness::{Step, ViewKind, render_view};

#[test]
fn drill_view_renders_question_and_controls() {
    let html = render_view(ViewKind::Drill, Vec::new());

    assert!(html.contains("3 × 4"), "missing question in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(html.contains("0 correct · 0 incorrect · 0%"), "missing score in {html}");
    assert!(!html.contains("notice-modal"), "unexpected notice in {html}");
}

#[test]
fn drill_view_shows_typed_answer() {
    let html = render_view(ViewKind::Drill, vec![Step::Type("1")]);
    assert!(html.contains("value=\"1\""), "missing answer text in {html}");
}

#[test]
fn drill_view_shows_incorrect_modal_on_same_question() {
    let html = render_view(ViewKind::Drill, vec![Step::Type("13"), Step::Submit]);

    assert!(html.contains("notice-modal"), "missing modal in {html}");
    assert!(html.contains("Incorrect — try again."), "missing message in {html}");
    assert!(html.contains("Close"), "missing close button in {html}");
    assert!(html.contains("3 × 4"), "question should not change in {html}");
}

#[test]
fn drill_view_shows_validation_message_for_blank_input() {
    let html = render_view(ViewKind::Drill, vec![Step::Type("  "), Step::Submit]);
    assert!(html.contains("Enter an answer."), "missing message in {html}");
}

#[test]
fn dismissed_notice_is_not_rendered() {
    let html = render_view(
        ViewKind::Drill,
        vec![Step::Type("abc"), Step::Submit, Step::Dismiss],
    );
    assert!(!html.contains("Please enter a valid number."), "stale notice in {html}");
}

#[test]
fn correct_answer_moves_to_next_question() {
    let html = render_view(ViewKind::Drill, vec![Step::Type("12"), Step::Submit]);

    assert!(html.contains("7 × 8"), "missing next question in {html}");
    assert!(html.contains("1 correct · 0 incorrect · 100%"), "missing score in {html}");
    assert!(html.contains("Streak 1 (best 1)"), "missing streak in {html}");
}

#[test]
fn milestone_renders_as_banner() {
    let mut steps = Vec::new();
    for answer in ["12", "56", "144", "12", "56"] {
        steps.push(Step::Type(answer));
        steps.push(Step::Submit);
    }
    let html = render_view(ViewKind::Drill, steps);

    assert!(html.contains("notice-banner"), "missing banner in {html}");
    assert!(html.contains("Milestone! 5 correct answers."), "missing message in {html}");
    assert!(!html.contains("notice-modal"), "milestone must not block in {html}");
}

#[test]
fn stats_view_renders_counters() {
    let html = render_view(
        ViewKind::Stats,
        vec![
            Step::Type("12"),
            Step::Submit,
            Step::Type("1"),
            Step::Submit,
        ],
    );

    assert!(html.contains("Best streak"), "missing label in {html}");
    assert!(html.contains("50%"), "missing accuracy in {html}");
    assert!(html.contains("Reset stats"), "missing reset in {html}");
    assert!(html.contains("Answer format: strict"), "missing policy in {html}");
}

#[test]
fn stats_view_after_reset_is_zeroed() {
    let html = render_view(
        ViewKind::Stats,
        vec![Step::Type("12"), Step::Submit, Step::Reset],
    );
    assert!(html.contains("0%"), "missing zero accuracy in {html}");
    assert!(!html.contains("100%"), "stale accuracy in {html}");
}
