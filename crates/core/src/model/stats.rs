use serde::Serialize;

/// Cumulative answer statistics for one session.
///
/// `best_streak >= current_streak` holds after every operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl Stats {
    pub fn record_correct(&mut self) {
        self.correct_count = self.correct_count.saturating_add(1);
        self.current_streak = self.current_streak.saturating_add(1);
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    pub fn record_incorrect(&mut self) {
        self.incorrect_count = self.incorrect_count.saturating_add(1);
        self.current_streak = 0;
    }

    /// Number of checked answers. Validation errors are not counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.correct_count) + u64::from(self.incorrect_count)
    }

    /// Share of correct answers in `[0, 1]`; `0` before anything was answered.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct_count) / total as f64
    }

    /// Accuracy as a whole percentage, rounded to nearest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }
}
