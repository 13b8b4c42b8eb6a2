mod notice;
mod problem;
mod stats;

pub use notice::{INCORRECT_MESSAGE, MILESTONE_INTERVAL, Notice, NoticeKind};
pub use problem::{FACTOR_MAX, FACTOR_MIN, Problem, ProblemError};
pub use stats::Stats;
