use crate::answer::{AnswerError, AnswerPolicy, parse_answer};
use crate::model::{Notice, Problem, Stats};
use crate::problems::ProblemSource;

/// What happened to a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitOutcome {
    Empty,
    Invalid,
    Correct,
    Incorrect,
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, SubmitOutcome::Correct)
    }
}

//
// ─── SESSION STATE ────────────────────────────────────────────────────────────
//

/// Complete state of a drill session.
///
/// Only submissions, notice dismissal and stats reset change it. Every transition is
/// synchronous and total; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    problem: Problem,
    answer_text: String,
    notice: Notice,
    stats: Stats,
}

impl SessionState {
    /// Fresh session: the given problem, empty buffer, zeroed stats, no notice.
    #[must_use]
    pub fn new(problem: Problem) -> Self {
        Self {
            problem,
            answer_text: String::new(),
            notice: Notice::None,
            stats: Stats::default(),
        }
    }

    #[must_use]
    pub fn problem(&self) -> Problem {
        self.problem
    }

    #[must_use]
    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    #[must_use]
    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Replace the answer buffer verbatim. No validation happens here.
    pub fn set_answer_text(&mut self, text: impl Into<String>) {
        self.answer_text = text.into();
    }

    /// Submit whatever is in the answer buffer.
    pub fn submit(
        &mut self,
        policy: AnswerPolicy,
        problems: &mut dyn ProblemSource,
    ) -> SubmitOutcome {
        let raw = std::mem::take(&mut self.answer_text);
        self.submit_input(&raw, policy, problems)
    }

    /// Check `raw` against the current problem and update problem, notice and stats.
    ///
    /// The answer buffer is always cleared, whatever the outcome.
    pub fn submit_input(
        &mut self,
        raw: &str,
        policy: AnswerPolicy,
        problems: &mut dyn ProblemSource,
    ) -> SubmitOutcome {
        self.answer_text.clear();

        let parsed = match parse_answer(raw, policy) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.notice = Notice::ValidationError(err);
                return match err {
                    AnswerError::Empty => SubmitOutcome::Empty,
                    AnswerError::InvalidNumber => SubmitOutcome::Invalid,
                };
            }
        };

        if parsed.matches(self.problem.answer()) {
            self.stats.record_correct();
            self.notice = Notice::milestone_for(self.stats.correct_count).unwrap_or_default();
            self.problem = problems.next_problem();
            SubmitOutcome::Correct
        } else {
            self.stats.record_incorrect();
            self.notice = Notice::Incorrect;
            SubmitOutcome::Incorrect
        }
    }

    /// Clear the active notice. Idempotent.
    pub fn dismiss_notice(&mut self) {
        self.notice = Notice::None;
    }

    /// Zero every counter; problem and notice are kept.
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }
}

/// Value-style submission: returns the next state instead of mutating `state`.
#[must_use]
pub fn submit_answer(
    state: &SessionState,
    raw: &str,
    policy: AnswerPolicy,
    problems: &mut dyn ProblemSource,
) -> (SessionState, SubmitOutcome) {
    let mut next = state.clone();
    let outcome = next.submit_input(raw, policy, problems);
    (next, outcome)
}
