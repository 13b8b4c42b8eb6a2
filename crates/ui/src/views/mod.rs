mod drill;
mod notice;
mod stats;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use drill::DrillView;
pub use notice::{NoticeBanner, NoticeModal};
pub use stats::StatsView;
