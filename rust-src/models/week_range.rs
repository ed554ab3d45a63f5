//! Monday to Sunday calendar windows.

use std::fmt;

use chrono::{Duration, NaiveDate};


/// Length of every week range, in days.
pub const DAYS_PER_WEEK: i64 = 7;


/// An inclusive seven day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}


impl WeekRange {
    /// The week whose last day is `end`, or `None` if it starts before the
    /// earliest representable date.
    pub fn ending_on(end: NaiveDate) -> Option<Self> {
        let start = end.checked_sub_signed(Duration::days(DAYS_PER_WEEK - 1))?;
        Some(Self { start, end })
    }

    /// The seven days ending the day before `today`.
    pub fn last_week(today: NaiveDate) -> Option<Self> {
        today
            .checked_sub_signed(Duration::days(1))
            .and_then(Self::ending_on)
    }

    /// The seven days immediately before [`WeekRange::last_week`].
    pub fn previous_week(today: NaiveDate) -> Option<Self> {
        today
            .checked_sub_signed(Duration::days(DAYS_PER_WEEK + 1))
            .and_then(Self::ending_on)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}


impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn num_days(range: &WeekRange) -> i64 {
        (range.end - range.start).num_days() + 1
    }

    #[test]
    fn test_ranges_for_monday() {
        let monday = day(2024, 1, 15);

        assert_eq!(
            WeekRange::last_week(monday),
            Some(WeekRange { start: day(2024, 1, 8), end: day(2024, 1, 14) })
        );
        assert_eq!(
            WeekRange::previous_week(monday),
            Some(WeekRange { start: day(2024, 1, 1), end: day(2024, 1, 7) })
        );
    }

    #[test]
    fn test_ranges_are_adjacent_and_disjoint() {
        // Every Monday of 2024, including the leap day crossing.
        let mut monday = day(2024, 1, 1);
        while monday.year() == 2024 {
            let last = WeekRange::last_week(monday).unwrap();
            let prev = WeekRange::previous_week(monday).unwrap();

            assert_eq!(num_days(&last), 7);
            assert_eq!(num_days(&prev), 7);
            assert_eq!(prev.end + Duration::days(1), last.start);
            assert!(!prev.contains(last.start));
            assert!(!last.contains(prev.end));
            assert_eq!(last.start.weekday(), Weekday::Mon);
            assert_eq!(last.end.weekday(), Weekday::Sun);

            monday += Duration::days(7);
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = WeekRange::ending_on(day(2024, 3, 3)).unwrap();
        assert_eq!(range.start, day(2024, 2, 26));
        assert!(range.contains(day(2024, 2, 26)));
        assert!(range.contains(day(2024, 2, 29)));
        assert!(range.contains(day(2024, 3, 3)));
        assert!(!range.contains(day(2024, 2, 25)));
        assert!(!range.contains(day(2024, 3, 4)));
    }

    #[test]
    fn test_display() {
        let range = WeekRange::ending_on(day(2024, 1, 14)).unwrap();
        assert_eq!(range.to_string(), "2024-01-08 to 2024-01-14");
    }

    #[test]
    fn test_earliest_dates_have_no_range() {
        let first = NaiveDate::MIN;

        assert_eq!(WeekRange::ending_on(first), None);
        assert_eq!(WeekRange::last_week(first), None);
        assert_eq!(WeekRange::previous_week(first + Duration::days(7)), None);
        assert_eq!(
            WeekRange::last_week(first + Duration::days(7)),
            Some(WeekRange { start: first, end: first + Duration::days(6) })
        );
    }
}
