//! Date windows for deadline buckets, relative to "today".
//!
//! Weeks end on Sunday.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::DeadlineBucket;

/// Application-deadline range a bucket selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Whether `end` itself is inside the window.
    pub end_inclusive: bool,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && if self.end_inclusive { date <= self.end } else { date < self.end }
    }
}

impl DeadlineBucket {
    /// The deadline range this bucket selects when today is `today`.
    pub fn window(&self, today: NaiveDate) -> DateWindow {
        let end_of_week = today + Duration::days(7 - today.weekday().num_days_from_sunday() as i64);
        match self {
            Self::Deadline => inclusive(today, today + Duration::days(7)),
            Self::ThisWeek => inclusive(today, end_of_week),
            Self::NextWeek => inclusive(end_of_week, end_of_week + Duration::days(7)),
            Self::ThisMonth => inclusive(today, last_day_of_month(today)),
            Self::Today => exclusive(today, today + Duration::days(1)),
            Self::Tomorrow => exclusive(today + Duration::days(1), today + Duration::days(2)),
        }
    }
}

fn inclusive(start: NaiveDate, end: NaiveDate) -> DateWindow {
    DateWindow { start, end, end_inclusive: true }
}

fn exclusive(start: NaiveDate, end: NaiveDate) -> DateWindow {
    DateWindow { start, end, end_inclusive: false }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-05-15 is a Wednesday.
    const WED: (i32, u32, u32) = (2024, 5, 15);

    #[test]
    fn test_deadline_is_next_seven_days() {
        let today = ymd(WED.0, WED.1, WED.2);
        let w = DeadlineBucket::Deadline.window(today);
        assert_eq!((w.start, w.end), (today, ymd(2024, 5, 22)));
        assert!(w.contains(ymd(2024, 5, 22)));
    }

    #[test]
    fn test_week_windows_end_on_sunday() {
        let today = ymd(WED.0, WED.1, WED.2);
        let this_week = DeadlineBucket::ThisWeek.window(today);
        assert_eq!(this_week.end, ymd(2024, 5, 19));
        let next_week = DeadlineBucket::NextWeek.window(today);
        assert_eq!((next_week.start, next_week.end), (ymd(2024, 5, 19), ymd(2024, 5, 26)));

        // On a Sunday "this week" runs to the following Sunday.
        let sunday = ymd(2024, 5, 19);
        assert_eq!(DeadlineBucket::ThisWeek.window(sunday).end, ymd(2024, 5, 26));
    }

    #[test]
    fn test_this_month() {
        assert_eq!(DeadlineBucket::ThisMonth.window(ymd(2024, 2, 10)).end, ymd(2024, 2, 29));
        assert_eq!(DeadlineBucket::ThisMonth.window(ymd(2024, 12, 3)).end, ymd(2024, 12, 31));
    }

    #[test]
    fn test_today_and_tomorrow_are_half_open() {
        let today = ymd(WED.0, WED.1, WED.2);
        let t = DeadlineBucket::Today.window(today);
        assert!(t.contains(today));
        assert!(!t.contains(ymd(2024, 5, 16)));
        let tm = DeadlineBucket::Tomorrow.window(today);
        assert!(!tm.contains(today));
        assert!(tm.contains(ymd(2024, 5, 16)));
        assert!(!tm.contains(ymd(2024, 5, 17)));
    }
}
