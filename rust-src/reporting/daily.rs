//! Daily comparison against baseline averages.

use std::fmt;

use crate::config::ReportConfig;
use crate::reporting::percent::{format_signed_percent, percent_diff, round_percent};


/// One baseline and how the day's amount compares to it.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineComparison {
    pub label: &'static str,
    pub baseline_litres: f64,
    pub percent: f64,
}


impl BaselineComparison {
    fn new(label: &'static str, amount: f64, baseline_litres: f64) -> Self {
        Self {
            label,
            baseline_litres,
            percent: round_percent(percent_diff(amount, baseline_litres)),
        }
    }
}


impl fmt::Display for BaselineComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compared with the {} average of {} L/day: {} vs baseline",
            self.label,
            self.baseline_litres,
            format_signed_percent(self.percent)
        )
    }
}


/// Comparisons for a single logged amount, local first.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub local: BaselineComparison,
    pub global: BaselineComparison,
}


impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.local)?;
        write!(f, "{}", self.global)
    }
}


/// Compare `amount` with the configured baselines.
pub fn daily_comparison(amount: f64, config: &ReportConfig) -> DailyReport {
    DailyReport {
        local: BaselineComparison::new("local", amount, config.local_baseline_litres),
        global: BaselineComparison::new("global", amount, config.global_baseline_litres),
    }
}
