use crunch_core::model::Stats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRowVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub rows: Vec<StatRowVm>,
    pub can_reset: bool,
}

#[must_use]
pub fn map_stats(stats: Stats) -> StatsVm {
    let row = |label, value: String| StatRowVm { label, value };
    let rows = vec![
        row("Correct", stats.correct_count.to_string()),
        row("Incorrect", stats.incorrect_count.to_string()),
        row("Total", stats.total().to_string()),
        row("Current streak", stats.current_streak.to_string()),
        row("Best streak", stats.best_streak.to_string()),
        row("Accuracy", format!("{}%", stats.accuracy_percent())),
    ];

    StatsVm {
        rows,
        can_reset: stats != Stats::default(),
    }
}
