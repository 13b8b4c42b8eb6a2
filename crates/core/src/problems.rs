use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Problem, ProblemError};

/// Where a session gets its next problem from.
///
/// Production code draws uniformly at random; tests script the sequence.
pub trait ProblemSource {
    fn next_problem(&mut self) -> Problem;
}

/// Uniform random problems backed by any `Rng`.
#[derive(Debug, Clone)]
pub struct RandomProblems<R> {
    rng: R,
}

impl<R: Rng> RandomProblems<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomProblems<StdRng> {
    /// Deterministic sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system; not reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ProblemSource for RandomProblems<R> {
    fn next_problem(&mut self) -> Problem {
        Problem::random(&mut self.rng)
    }
}

/// Cycles through a fixed list of problems and counts how many were drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedProblems {
    script: Vec<Problem>,
    next: usize,
    draws: usize,
}

impl FixedProblems {
    /// # Errors
    ///
    /// Returns `ProblemError::EmptyScript` if `script` is empty.
    pub fn new(script: Vec<Problem>) -> Result<Self, ProblemError> {
        if script.is_empty() {
            return Err(ProblemError::EmptyScript);
        }
        Ok(Self {
            script,
            next: 0,
            draws: 0,
        })
    }

    /// How many problems have been handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl ProblemSource for FixedProblems {
    fn next_problem(&mut self) -> Problem {
        let problem = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        self.draws += 1;
        problem
    }
}

impl<S: ProblemSource + ?Sized> ProblemSource for Box<S> {
    fn next_problem(&mut self) -> Problem {
        (**self).next_problem()
    }
}

/// Deterministic source for tests and demos: `3 × 4`, `7 × 8`, `12 × 12`, then repeats.
///
/// # Panics
///
/// Panics if the built-in factors are rejected, which would be a bug in this function.
#[must_use]
pub fn fixed_problems() -> FixedProblems {
    let script = [(3, 4), (7, 8), (12, 12)]
        .into_iter()
        .map(|(a, b)| Problem::new(a, b).expect("built-in factors are in range"))
        .collect();
    FixedProblems::new(script).expect("built-in script is not empty")
}
