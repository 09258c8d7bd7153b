use chrono::NaiveDate;

use crate::calendar::{
    date_type_date_str, get_date_format, get_single_season_display, get_week_map,
    get_week_start_and_end_date, get_week_start_and_end_display,
};
use crate::model::period::PeriodType;
use crate::service::dto::{DaySummary, PeriodLabel, PeriodSummary};

const DAY_LABEL_FORMAT: &str = "MM-DD (ddd)";

/// Collects the week, quarter and period labels for `date`.
/// `None` when the date is absent or its week is out of range.
pub fn summarize(date: Option<NaiveDate>) -> Option<PeriodSummary> {
    let (week_start, week_end) = get_week_start_and_end_date(date)?;

    let days = get_week_map(date)
        .into_iter()
        .map(|(day, d)| DaySummary {
            day,
            date: d,
            label: get_date_format(Some(d), DAY_LABEL_FORMAT),
        })
        .collect();

    let labels = PeriodType::ALL
        .iter()
        .map(|period| PeriodLabel {
            period: *period,
            pattern: period.format_pattern().to_string(),
            label: date_type_date_str(*period, date),
        })
        .collect();

    Some(PeriodSummary {
        date: get_date_format(date, "YYYY-MM-DD"),
        week_display: get_week_start_and_end_display(date),
        season_display: get_single_season_display(date),
        week_start,
        week_end,
        days,
        labels,
    })
}
