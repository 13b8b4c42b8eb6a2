use crunch_core::model::{Notice, NoticeKind};
use services::SessionEngine;

/// How the drill screen should present a notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
    /// Modal that must be closed, as opposed to an inline banner.
    pub blocking: bool,
    pub tone_class: &'static str,
}

#[must_use]
pub fn map_notice(notice: &Notice) -> Option<NoticeVm> {
    let message = notice.message()?;
    let (title, blocking, tone_class) = match notice {
        Notice::None => return None,
        Notice::ValidationError(_) => ("Check your answer", true, "warning"),
        Notice::Incorrect => ("Not quite", true, "error"),
        Notice::Milestone { .. } => ("Nice work", false, "success"),
    };

    Some(NoticeVm {
        kind: notice.kind(),
        title,
        message,
        blocking,
        tone_class,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrillVm {
    pub question_label: String,
    pub answer_text: String,
    pub score_label: String,
    pub streak_label: String,
    pub notice: Option<NoticeVm>,
}

impl DrillVm {
    #[must_use]
    pub fn from_engine(engine: &SessionEngine) -> Self {
        let stats = engine.stats();
        let score_label = format!(
            "{} correct · {} incorrect · {}%",
            stats.correct_count,
            stats.incorrect_count,
            stats.accuracy_percent()
        );
        let streak_label = if stats.best_streak == 0 {
            "No streak yet".to_string()
        } else {
            format!(
                "Streak {} (best {})",
                stats.current_streak, stats.best_streak
            )
        };

        Self {
            question_label: engine.problem().to_string(),
            answer_text: engine.answer_text().to_string(),
            score_label,
            streak_label,
            notice: map_notice(engine.notice()),
        }
    }

    /// Whether the answer controls should be covered by a modal notice.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.notice.as_ref().is_some_and(|notice| notice.blocking)
    }
}
