#![forbid(unsafe_code)]

pub mod answer;
pub mod model;
pub mod problems;
pub mod session;

pub use answer::{AnswerError, AnswerPolicy, ParsePolicyError, ParsedAnswer, parse_answer};
pub use problems::{FixedProblems, ProblemSource, RandomProblems, fixed_problems};
pub use session::{SessionState, SubmitOutcome, submit_answer};
