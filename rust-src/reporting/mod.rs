//! Reporting layer: baseline comparisons and weekly change.

mod daily;
mod percent;
mod weekly;

#[allow(unused_imports)]
pub use daily::{daily_comparison, BaselineComparison, DailyReport};
#[allow(unused_imports)]
pub use percent::{format_signed_percent, percent_diff, round_percent};
#[allow(unused_imports)]
pub use weekly::{weekly_change, Trend, WeekTotal, WeeklySummary};
