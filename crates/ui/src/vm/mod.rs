mod drill_vm;
mod stats_vm;

pub use drill_vm::{DrillVm, NoticeVm, map_notice};
pub use stats_vm::{StatRowVm, StatsVm, map_stats};
