use serde::Serialize;

use crunch_core::model::{NoticeKind, Problem, Stats};

/// Serializable read model of an engine at one point in time.
///
/// Carries raw values only; formatting belongs to whoever renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub problem: Problem,
    pub answer_text: String,
    pub notice: NoticeKind,
    pub notice_message: Option<String>,
    pub stats: Stats,
    pub total: u64,
    pub accuracy: f64,
}
