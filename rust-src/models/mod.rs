//! Data models for logged water usage.

mod usage_record;
mod week_range;

pub use usage_record::UsageRecord;
pub use week_range::WeekRange;
