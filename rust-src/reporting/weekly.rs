//! Week-over-week change, reported on Mondays.

use std::fmt;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{UsageRecord, WeekRange};
use crate::reporting::percent::{percent_diff, round_percent};
use crate::storage::sum_in_range;


/// Litres logged over one week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekTotal {
    pub range: WeekRange,
    pub litres: f64,
}


impl WeekTotal {
    fn from_records(records: &[UsageRecord], range: WeekRange) -> Self {
        Self {
            range,
            litres: sum_in_range(records, &range),
        }
    }
}


/// Direction of the weekly change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
    NoChange,
}


impl Trend {
    fn from_percent(percent: f64) -> Self {
        if percent > 0.0 {
            Self::Increase
        } else if percent < 0.0 {
            Self::Decrease
        } else {
            Self::NoChange
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::NoChange => "no change",
        }
    }
}


/// Outcome of comparing the last two Monday to Sunday weeks.
#[derive(Debug, Clone, PartialEq)]
pub enum WeeklySummary {
    /// Nothing logged in either week.
    NoData,
    /// The older week is empty, so there's nothing to divide by.
    NoPriorWeek { last_week: WeekTotal },
    Change {
        last_week: WeekTotal,
        prev_week: WeekTotal,
        percent: f64,
        trend: Trend,
    },
}


impl fmt::Display for WeeklySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "No data for the past two weeks."),
            Self::NoPriorWeek { last_week } => {
                writeln!(f, "Last week ({}): {:.1} L", last_week.range, last_week.litres)?;
                write!(f, "No data for the prior week to compare against.")
            }
            Self::Change { last_week, prev_week, percent, trend } => {
                writeln!(f, "Last week ({}): {:.1} L", last_week.range, last_week.litres)?;
                writeln!(f, "Week before ({}): {:.1} L", prev_week.range, prev_week.litres)?;
                match trend {
                    Trend::NoChange => write!(f, "Change: 0% ({})", trend.label()),
                    _ => write!(f, "Change: {:.0}% {}", percent.abs(), trend.label()),
                }
            }
        }
    }
}


/// Compare the two weeks before `today`.
///
/// Returns `None` unless `today` is a Monday, and an error if the two weeks
/// before it fall off the start of the calendar.
pub fn weekly_change(
    today: NaiveDate,
    records: &[UsageRecord],
) -> Result<Option<WeeklySummary>> {
    if today.weekday() != Weekday::Mon {
        return Ok(None);
    }

    let (last_range, prev_range) = WeekRange::last_week(today)
        .zip(WeekRange::previous_week(today))
        .with_context(|| format!("Date too early for a weekly summary: {today}"))?;

    let last_week = WeekTotal::from_records(records, last_range);
    let prev_week = WeekTotal::from_records(records, prev_range);

    let summary = if last_week.litres == 0.0 && prev_week.litres == 0.0 {
        WeeklySummary::NoData
    } else if prev_week.litres == 0.0 {
        WeeklySummary::NoPriorWeek { last_week }
    } else {
        let percent = round_percent(percent_diff(last_week.litres, prev_week.litres));
        WeeklySummary::Change {
            last_week,
            prev_week,
            percent,
            trend: Trend::from_percent(percent),
        }
    };

    Ok(Some(summary))
}
