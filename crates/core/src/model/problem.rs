use std::fmt;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Smallest factor a problem may use.
pub const FACTOR_MIN: u32 = 1;
/// Largest factor a problem may use.
pub const FACTOR_MAX: u32 = 12;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("factor {value} is outside {FACTOR_MIN}..={FACTOR_MAX}")]
    FactorOutOfRange { value: u32 },

    #[error("a scripted problem source needs at least one problem")]
    EmptyScript,
}

//
// ─── PROBLEM ──────────────────────────────────────────────────────────────────
//

/// An ordered pair of factors whose product the user must supply.
///
/// Problems are never mutated; the session replaces them wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Problem {
    a: u32,
    b: u32,
}

impl Problem {
    /// Build a problem from explicit factors.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::FactorOutOfRange` if either factor is outside `1..=12`.
    pub fn new(a: u32, b: u32) -> Result<Self, ProblemError> {
        for value in [a, b] {
            if !(FACTOR_MIN..=FACTOR_MAX).contains(&value) {
                return Err(ProblemError::FactorOutOfRange { value });
            }
        }
        Ok(Self { a, b })
    }

    /// Draw both factors independently and uniformly from `1..=12`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: rng.random_range(FACTOR_MIN..=FACTOR_MAX),
            b: rng.random_range(FACTOR_MIN..=FACTOR_MAX),
        }
    }

    #[must_use]
    pub fn a(&self) -> u32 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> u32 {
        self.b
    }

    /// The expected product.
    #[must_use]
    pub fn answer(&self) -> u32 {
        self.a * self.b
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.a, self.b)
    }
}
