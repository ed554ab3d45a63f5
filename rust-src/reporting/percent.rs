//! Percentage helpers shared by the daily and weekly reports.


/// Relative difference of `value` against `baseline`, in percent.
///
/// A zero baseline gives 0 rather than dividing by zero.
pub fn percent_diff(value: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    (value - baseline) / baseline * 100.0
}


/// Round to the nearest whole percent, halves toward positive infinity.
///
/// Stays in `f64` so very large ratios are not clamped to an integer range.
pub fn round_percent(percent: f64) -> f64 {
    let rounded = (percent + 0.5).floor();
    // Normalise -0.0 so it never renders as "-0%".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}


/// Render a whole percentage with an explicit sign, except for zero.
pub fn format_signed_percent(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{percent:.0}%")
    } else {
        format!("{percent:.0}%")
    }
}
