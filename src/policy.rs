//! Working-day, target and completion calculations for one month.
//!
//! Everything here is a pure function of the month, the join date, the
//! policy ratio and the month's holiday and attendance sets.

use crate::dates::{self, Month};
use crate::models::MonthRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const WORKING_DAYS_PER_WEEK: u8 = 5;

/// Parsed inputs for one month of one profile.
#[derive(Debug, Clone)]
pub struct MonthInputs {
    pub month: Month,
    pub start: NaiveDate,
    pub holidays: BTreeSet<NaiveDate>,
    pub attendance: BTreeSet<NaiveDate>,
}

impl MonthInputs {
    pub fn from_record(month: Month, join_date: &str, record: &MonthRecord) -> Self {
        Self {
            month,
            start: effective_start(month, join_date),
            holidays: dates::parse_date_set(&record.holidays),
            attendance: dates::parse_date_set(&record.attendance),
        }
    }

    pub fn working_days(&self) -> Vec<NaiveDate> {
        working_days_from(self.month, self.start, &self.holidays)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    Weekend,
    Holiday,
    BeforeStart,
    Working,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub required: u32,
    pub completed: u32,
    pub remaining: u32,
    pub percent: u32,
}

impl Progress {
    /// `completed` may exceed `required`; only the percentage is capped.
    pub fn new(required: u32, completed: u32) -> Self {
        let percent = if required == 0 {
            100
        } else {
            let (completed, required) = (u64::from(completed), u64::from(required));
            // round(100 * c / r), halves rounding up
            ((200 * completed + required) / (2 * required)).min(100) as u32
        };
        Self {
            required,
            completed,
            remaining: required.saturating_sub(completed),
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub effective_start: NaiveDate,
    pub month_end: NaiveDate,
    pub working_day_count: u32,
    pub holiday_count: u32,
    pub days_per_week: u8,
    #[serde(flatten)]
    pub progress: Progress,
}

/// The later of the join date and the first day of the month.
///
/// A join date that does not parse is treated as the month start.
pub fn effective_start(month: Month, join_date: &str) -> NaiveDate {
    let first = month.first_day();
    match dates::parse_date(join_date) {
        Some(joined) if joined > first => joined,
        _ => first,
    }
}

/// Weekdays from the effective start to the end of the month that are not
/// holidays.
pub fn working_days(month: Month, join_date: &str, holidays: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
    working_days_from(month, effective_start(month, join_date), holidays)
}

fn working_days_from(month: Month, start: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
    month
        .days()
        .filter(|day| classify(*day, start, holidays) == DayKind::Working)
        .collect()
}

pub fn classify(date: NaiveDate, start: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> DayKind {
    if dates::is_weekend(date) {
        DayKind::Weekend
    } else if holidays.contains(&date) {
        DayKind::Holiday
    } else if date < start {
        DayKind::BeforeStart
    } else {
        DayKind::Working
    }
}

/// ceil(days_per_week / 5 * working_day_count), in integer arithmetic.
pub fn required_office_days(days_per_week: u8, working_day_count: u32) -> u32 {
    let ratio = u64::from(days_per_week.min(WORKING_DAYS_PER_WEEK));
    let divisor = u64::from(WORKING_DAYS_PER_WEEK);
    ((ratio * u64::from(working_day_count) + divisor - 1) / divisor) as u32
}

/// Attendance marks inside `[start, end]` that land on a weekday which is
/// not a holiday.
pub fn completed_count(
    attendance: &BTreeSet<NaiveDate>,
    start: NaiveDate,
    end: NaiveDate,
    holidays: &BTreeSet<NaiveDate>,
) -> u32 {
    if start > end {
        return 0;
    }
    attendance
        .range(start..=end)
        .filter(|day| dates::is_weekday(**day) && !holidays.contains(*day))
        .count() as u32
}

pub fn summarize_inputs(inputs: &MonthInputs, days_per_week: u8) -> MonthSummary {
    let month_end = inputs.month.last_day();
    let working_day_count = inputs.working_days().len() as u32;
    let required = required_office_days(days_per_week, working_day_count);
    let completed = completed_count(&inputs.attendance, inputs.start, month_end, &inputs.holidays);

    MonthSummary {
        effective_start: inputs.start,
        month_end,
        working_day_count,
        holiday_count: inputs
            .holidays
            .iter()
            .filter(|day| inputs.month.contains(**day))
            .count() as u32,
        days_per_week,
        progress: Progress::new(required, completed),
    }
}

pub fn summarize(month: Month, join_date: &str, days_per_week: u8, record: &MonthRecord) -> MonthSummary {
    summarize_inputs(&MonthInputs::from_record(month, join_date, record), days_per_week)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn october() -> Month {
        Month::new(2025, 10).unwrap()
    }

    fn record(holidays: &[&str], attendance: &[&str]) -> MonthRecord {
        MonthRecord {
            holidays: holidays.iter().map(|d| d.to_string()).collect(),
            attendance: attendance.iter().map(|d| d.to_string()).collect(),
        }
    }

    #[test]
    fn october_2025_has_23_working_days() {
        let days = working_days(october(), "2024-01-01", &BTreeSet::new());
        assert_eq!(days.len(), 23);
        assert_eq!(days.first(), Some(&ymd(2025, 10, 1)));
        assert_eq!(days.last(), Some(&ymd(2025, 10, 31)));
        assert_eq!(required_office_days(3, 23), 14);
    }

    #[test]
    fn mid_month_join_restricts_working_days() {
        let days = working_days(october(), "2025-10-15", &BTreeSet::new());
        assert!(days.iter().all(|day| *day >= ymd(2025, 10, 15)));
        assert_eq!(days.len(), 13);
    }

    #[test]
    fn malformed_join_date_falls_back_to_month_start() {
        assert_eq!(effective_start(october(), "not a date"), ymd(2025, 10, 1));
        assert_eq!(effective_start(october(), ""), ymd(2025, 10, 1));
    }

    #[test]
    fn join_after_month_end_yields_no_working_days() {
        let summary = summarize(october(), "2025-12-01", 3, &record(&[], &["2025-10-06"]));
        assert_eq!(summary.working_day_count, 0);
        assert_eq!(summary.progress.required, 0);
        assert_eq!(summary.progress.completed, 0);
        assert_eq!(summary.progress.percent, 100);
    }

    #[test]
    fn holidays_are_excluded_from_working_days() {
        let holidays = BTreeSet::from([ymd(2025, 10, 2), ymd(2025, 10, 20), ymd(2025, 10, 4)]);
        let days = working_days(october(), "", &holidays);
        assert_eq!(days.len(), 21);
        assert!(!days.contains(&ymd(2025, 10, 2)));
    }

    #[test]
    fn classification_is_exclusive() {
        let holidays = BTreeSet::from([ymd(2025, 10, 4), ymd(2025, 10, 6)]);
        let start = ymd(2025, 10, 3);
        assert_eq!(classify(ymd(2025, 10, 4), start, &holidays), DayKind::Weekend);
        assert_eq!(classify(ymd(2025, 10, 6), start, &holidays), DayKind::Holiday);
        assert_eq!(classify(ymd(2025, 10, 2), start, &holidays), DayKind::BeforeStart);
        assert_eq!(classify(ymd(2025, 10, 7), start, &holidays), DayKind::Working);
    }

    #[test]
    fn required_office_days_rounds_up() {
        assert_eq!(required_office_days(0, 23), 0);
        assert_eq!(required_office_days(1, 23), 5);
        assert_eq!(required_office_days(5, 23), 23);
        assert_eq!(required_office_days(2, 0), 0);
        assert_eq!(required_office_days(9, 10), 10);
        for policy in 0..=5u8 {
            for count in 0..=23u32 {
                let exact = f64::from(policy) / 5.0 * f64::from(count);
                assert_eq!(required_office_days(policy, count), exact.ceil() as u32);
            }
        }
    }

    #[test]
    fn completed_ignores_weekends_holidays_and_out_of_range_marks() {
        let summary = summarize(
            october(),
            "2025-10-08",
            3,
            &record(
                &["2025-10-09"],
                &[
                    "2025-10-06", // before join
                    "2025-10-09", // holiday
                    "2025-10-11", // saturday
                    "2025-10-10",
                    "2025-10-13",
                    "2025-11-03", // next month
                    "garbage",
                ],
            ),
        );
        assert_eq!(summary.progress.completed, 2);
    }

    #[test]
    fn policy_zero_is_always_complete() {
        let summary = summarize(october(), "", 0, &record(&[], &[]));
        assert_eq!(summary.progress.required, 0);
        assert_eq!(summary.progress.percent, 100);
        assert_eq!(summary.progress.remaining, 0);
    }

    #[test]
    fn over_attendance_caps_only_the_percent() {
        let progress = Progress::new(2, 5);
        assert_eq!(progress.completed, 5);
        assert_eq!(progress.remaining, 0);
        assert_eq!(progress.percent, 100);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(Progress::new(8, 1).percent, 13); // 12.5
        assert_eq!(Progress::new(3, 1).percent, 33);
        assert_eq!(Progress::new(3, 2).percent, 67);
        assert_eq!(Progress::new(14, 7).remaining, 7);
    }
}
