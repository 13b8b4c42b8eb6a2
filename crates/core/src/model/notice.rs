use serde::Serialize;

use crate::answer::AnswerError;

/// A milestone fires every time the correct-answer count reaches a multiple of this.
pub const MILESTONE_INTERVAL: u32 = 5;

/// Shown when a well-formed answer does not equal the product.
pub const INCORRECT_MESSAGE: &str = "Incorrect — try again.";

/// Discriminant of a [`Notice`], for presentation layers that style by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoticeKind {
    None,
    ValidationError,
    Incorrect,
    Milestone,
}

/// The single transient message describing the last submission.
///
/// A new notice always replaces the previous one; notices are never queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Notice {
    #[default]
    None,
    /// The input was blank or not a number. Problem and stats were left alone.
    ValidationError(AnswerError),
    /// A valid number that is not the product. The same problem stays up.
    Incorrect,
    /// Informational; the session has already moved on to the next problem.
    Milestone { correct_count: u32 },
}

impl Notice {
    /// The milestone notice for `correct_count`, if that count is a positive multiple of 5.
    #[must_use]
    pub fn milestone_for(correct_count: u32) -> Option<Self> {
        (correct_count > 0 && correct_count % MILESTONE_INTERVAL == 0)
            .then_some(Self::Milestone { correct_count })
    }

    #[must_use]
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::None => NoticeKind::None,
            Notice::ValidationError(_) => NoticeKind::ValidationError,
            Notice::Incorrect => NoticeKind::Incorrect,
            Notice::Milestone { .. } => NoticeKind::Milestone,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Notice::None)
    }

    /// User-facing text, or `None` when no notice is active.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Notice::None => None,
            Notice::ValidationError(err) => Some(err.to_string()),
            Notice::Incorrect => Some(INCORRECT_MESSAGE.to_string()),
            Notice::Milestone { correct_count } => {
                Some(format!("Milestone! {correct_count} correct answers."))
            }
        }
    }
}
