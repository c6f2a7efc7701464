use crate::dates::{self, Month};
use crate::models::{CalendarDay, MonthView, Profile};
use crate::policy::{MonthInputs, classify, summarize_inputs};
use crate::series::series_for;

/// Everything the page needs to draw one month of one profile.
pub fn build_month_view(profile: &Profile, month: Month) -> MonthView {
    let record = profile.months.get(&month.key()).cloned().unwrap_or_default();
    let inputs = MonthInputs::from_record(month, &profile.join_date, &record);
    let summary = summarize_inputs(&inputs, profile.days_per_week);
    let series = series_for(&inputs, summary.progress.required, summary.working_day_count);

    let days = month
        .days()
        .map(|date| CalendarDay {
            date: dates::date_key(date),
            kind: classify(date, inputs.start, &inputs.holidays),
            attended: inputs.attendance.contains(&date),
        })
        .collect();

    MonthView {
        profile_id: profile.id.clone(),
        month: month.key(),
        holidays: record.holidays.into_iter().collect(),
        attendance: record.attendance.into_iter().collect(),
        summary,
        days,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthRecord;
    use crate::policy::DayKind;

    #[test]
    fn month_view_matches_october_example() {
        let mut profile = Profile {
            id: "p1".to_string(),
            name: "Avery".to_string(),
            join_date: "2024-05-01".to_string(),
            days_per_week: 3,
            months: Default::default(),
        };
        let mut record = MonthRecord::default();
        record.attendance.insert("2025-10-01".to_string());
        record.attendance.insert("2025-10-02".to_string());
        profile.months.insert("2025-10".to_string(), record);

        let view = build_month_view(&profile, Month::new(2025, 10).unwrap());
        assert_eq!(view.month, "2025-10");
        assert_eq!(view.summary.working_day_count, 23);
        assert_eq!(view.summary.progress.required, 14);
        assert_eq!(view.summary.progress.completed, 2);
        assert_eq!(view.summary.progress.remaining, 12);
        assert_eq!(view.summary.progress.percent, 14);
        assert_eq!(view.days.len(), 31);
        assert_eq!(view.days[3].kind, DayKind::Weekend);
        assert!(view.days[0].attended);
        assert_eq!(view.series.last().map(|point| point.actual), Some(2));
    }

    #[test]
    fn empty_month_view_has_defaults() {
        let profile = Profile {
            id: "p2".to_string(),
            name: "Jo".to_string(),
            join_date: "garbage".to_string(),
            days_per_week: 0,
            months: Default::default(),
        };
        let view = build_month_view(&profile, Month::new(2025, 2).unwrap());
        assert!(view.attendance.is_empty());
        assert_eq!(view.summary.progress.percent, 100);
        assert_eq!(view.days.len(), 28);
    }

    #[test]
    fn last_representable_month_renders() {
        let profile = Profile {
            id: "p3".to_string(),
            name: "Edge".to_string(),
            join_date: "2025-01-01".to_string(),
            days_per_week: 5,
            months: Default::default(),
        };
        let view = build_month_view(&profile, Month::containing(chrono::NaiveDate::MAX));
        assert_eq!(view.days.len(), 31);
        assert_eq!(view.series.len(), 31);
    }
}
