use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Why a submitted answer could not be checked.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Enter an answer.")]
    Empty,
    #[error("Please enter a valid number.")]
    InvalidNumber,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown answer policy `{raw}` (expected `strict` or `permissive`)")]
pub struct ParsePolicyError {
    pub raw: String,
}

//
// ─── POLICY ───────────────────────────────────────────────────────────────────
//

/// Which numeric literals count as a well-formed answer.
///
/// - `Strict`: an optional sign followed by ASCII digits (`"12"`, `"+12"`, `"-3"`).
/// - `Permissive`: any finite decimal literal, so `"12.0"` and `"12e0"` match a product of 12.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerPolicy {
    #[default]
    Strict,
    Permissive,
}

impl FromStr for AnswerPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            _ => Err(ParsePolicyError { raw: s.to_string() }),
        }
    }
}

impl fmt::Display for AnswerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerPolicy::Strict => f.write_str("strict"),
            AnswerPolicy::Permissive => f.write_str("permissive"),
        }
    }
}

//
// ─── PARSING ──────────────────────────────────────────────────────────────────
//

/// A well-formed numeric answer, ready to compare against a product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedAnswer {
    Integer(i64),
    /// An integer literal too large for `i64`; never equal to a product.
    OutOfRange,
    Decimal(f64),
}

impl ParsedAnswer {
    /// Exact equality against the expected product, no tolerance.
    #[must_use]
    pub fn matches(self, expected: u32) -> bool {
        match self {
            ParsedAnswer::Integer(value) => value == i64::from(expected),
            ParsedAnswer::OutOfRange => false,
            #[allow(clippy::float_cmp)]
            ParsedAnswer::Decimal(value) => value == f64::from(expected),
        }
    }
}

/// Trim and parse raw user input under the given policy.
///
/// # Errors
///
/// Returns `AnswerError::Empty` for blank input and `AnswerError::InvalidNumber` when the
/// trimmed text is not a numeric literal the policy accepts.
pub fn parse_answer(raw: &str, policy: AnswerPolicy) -> Result<ParsedAnswer, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty);
    }

    match policy {
        AnswerPolicy::Strict => parse_strict(trimmed),
        AnswerPolicy::Permissive => parse_permissive(trimmed),
    }
}

fn parse_strict(trimmed: &str) -> Result<ParsedAnswer, AnswerError> {
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(AnswerError::InvalidNumber);
    }

    match trimmed.parse::<i64>() {
        Ok(value) => Ok(ParsedAnswer::Integer(value)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Ok(ParsedAnswer::OutOfRange),
            _ => Err(AnswerError::InvalidNumber),
        },
    }
}

fn parse_permissive(trimmed: &str) -> Result<ParsedAnswer, AnswerError> {
    // f64's parser also takes "inf" and "NaN"; neither is an answer.
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| AnswerError::InvalidNumber)?;
    if !value.is_finite() {
        return Err(AnswerError::InvalidNumber);
    }
    Ok(ParsedAnswer::Decimal(value))
}
