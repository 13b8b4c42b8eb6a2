use crunch_core::{AnswerPolicy, ProblemSource, RandomProblems};

use crate::engine::SessionEngine;

/// Knobs the composition root passes down when it builds an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed seed for reproducible problem sequences; OS entropy when `None`.
    pub seed: Option<u64>,
    pub answer_policy: AnswerPolicy,
}

impl EngineConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_answer_policy(mut self, answer_policy: AnswerPolicy) -> Self {
        self.answer_policy = answer_policy;
        self
    }

    /// The problem source this config describes.
    #[must_use]
    pub fn problem_source(&self) -> Box<dyn ProblemSource + Send> {
        match self.seed {
            Some(seed) => Box::new(RandomProblems::seeded(seed)),
            None => Box::new(RandomProblems::from_entropy()),
        }
    }

    #[must_use]
    pub fn build_engine(&self) -> SessionEngine {
        tracing::debug!(
            seed = ?self.seed,
            answer_policy = %self.answer_policy,
            "building session engine"
        );
        SessionEngine::new(self.problem_source(), self.answer_policy)
    }
}
