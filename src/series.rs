use crate::dates::Month;
use crate::policy::{DayKind, MonthInputs, classify};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub target: f64,
    pub actual: u32,
}

/// Cumulative target and actual office days, one point per calendar day.
///
/// The target grows by `required / working_day_count` on every working day
/// and the actual grows by one on every attended working day. Weekends,
/// holidays and days before `start` repeat the previous values.
pub fn cumulative_series(
    month: Month,
    holidays: &BTreeSet<NaiveDate>,
    start: NaiveDate,
    attendance: &BTreeSet<NaiveDate>,
    required: u32,
    working_day_count: u32,
) -> Vec<SeriesPoint> {
    let step = if working_day_count == 0 {
        0.0
    } else {
        f64::from(required) / f64::from(working_day_count)
    };

    let mut target = 0.0;
    let mut actual = 0u32;
    month
        .days()
        .map(|date| {
            if classify(date, start, holidays) == DayKind::Working {
                target += step;
                if attendance.contains(&date) {
                    actual += 1;
                }
            }
            SeriesPoint {
                date,
                target: round_to_hundredths(target),
                actual,
            }
        })
        .collect()
}

pub fn series_for(inputs: &MonthInputs, required: u32, working_day_count: u32) -> Vec<SeriesPoint> {
    cumulative_series(
        inputs.month,
        &inputs.holidays,
        inputs.start,
        &inputs.attendance,
        required,
        working_day_count,
    )
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
