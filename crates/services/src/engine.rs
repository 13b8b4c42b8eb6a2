use std::fmt;

use crunch_core::model::{Notice, Problem, Stats};
use crunch_core::{AnswerPolicy, ProblemSource, SessionState, SubmitOutcome};

use crate::snapshot::SessionSnapshot;

//
// ─── ENGINE ───────────────────────────────────────────────────────────────────
//

/// Single authority for problem generation, answer validation and statistics.
///
/// Owns the session state and the problem source. Presentation layers read through the
/// accessors and drive it only through the four actions.
pub struct SessionEngine {
    state: SessionState,
    problems: Box<dyn ProblemSource + Send>,
    answer_policy: AnswerPolicy,
}

impl SessionEngine {
    /// Start a session with the first problem drawn from `problems`.
    #[must_use]
    pub fn new(mut problems: Box<dyn ProblemSource + Send>, answer_policy: AnswerPolicy) -> Self {
        let state = SessionState::new(problems.next_problem());
        Self {
            state,
            problems,
            answer_policy,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn problem(&self) -> Problem {
        self.state.problem()
    }

    #[must_use]
    pub fn answer_text(&self) -> &str {
        self.state.answer_text()
    }

    #[must_use]
    pub fn notice(&self) -> &Notice {
        self.state.notice()
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.state.stats()
    }

    #[must_use]
    pub fn answer_policy(&self) -> AnswerPolicy {
        self.answer_policy
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.state.stats().total()
    }

    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.state.stats().accuracy()
    }

    pub fn set_answer_text(&mut self, text: impl Into<String>) {
        self.state.set_answer_text(text);
    }

    /// Submit the current answer buffer.
    pub fn submit_answer(&mut self) -> SubmitOutcome {
        let problem = self.state.problem();
        let outcome = self
            .state
            .submit(self.answer_policy, self.problems.as_mut());
        let stats = self.state.stats();

        tracing::debug!(
            problem = %problem,
            ?outcome,
            correct = stats.correct_count,
            incorrect = stats.incorrect_count,
            streak = stats.current_streak,
            "answer submitted"
        );
        if let Notice::Milestone { correct_count } = *self.state.notice() {
            tracing::info!(correct_count, best_streak = stats.best_streak, "milestone reached");
        }

        outcome
    }

    pub fn dismiss_notice(&mut self) {
        tracing::trace!(kind = ?self.state.notice().kind(), "notice dismissed");
        self.state.dismiss_notice();
    }

    pub fn reset_stats(&mut self) {
        tracing::info!(previous = ?self.state.stats(), "stats reset");
        self.state.reset_stats();
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let stats = self.stats();
        SessionSnapshot {
            problem: self.problem(),
            answer_text: self.answer_text().to_string(),
            notice: self.notice().kind(),
            notice_message: self.notice().message(),
            stats,
            total: stats.total(),
            accuracy: stats.accuracy(),
        }
    }
}

impl fmt::Debug for SessionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEngine")
            .field("state", &self.state)
            .field("answer_policy", &self.answer_policy)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
