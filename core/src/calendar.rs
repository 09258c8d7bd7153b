use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::model::day::DayType;
use crate::model::period::PeriodType;
use crate::pattern::format_date;

/// Monday and Sunday of the ISO week containing `date`.
fn week_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let since_monday = DayType::from(date.weekday()).offset();
    let monday = date.checked_sub_days(Days::new(since_monday));
    let sunday = date.checked_add_days(Days::new(DayType::Sunday.offset() - since_monday));

    match (monday, sunday) {
        (Some(monday), Some(sunday)) => Some((monday, sunday)),
        _ => {
            debug!(%date, "week of date leaves the supported calendar range");
            None
        }
    }
}

/// 取得當週的日期: the seven dates of the week containing `date`, Monday first.
pub fn get_week_map(date: Option<NaiveDate>) -> BTreeMap<DayType, NaiveDate> {
    let Some((monday, _)) = date.and_then(week_bounds) else {
        return BTreeMap::new();
    };

    DayType::ALL
        .iter()
        .map(|day| monday.checked_add_days(Days::new(day.offset())).map(|d| (*day, d)))
        .collect::<Option<BTreeMap<_, _>>>()
        .unwrap_or_default()
}

/// 取得當週的起訖日期(文字), e.g. `2023-11-27 ~ 12-03 (W48)`.
pub fn get_week_start_and_end_display(date: Option<NaiveDate>) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let Some((monday, sunday)) = week_bounds(date) else {
        return String::new();
    };

    let week_count = get_date_format(Some(date), "W");
    let this_monday = get_date_format(Some(monday), "YYYY-MM-DD");
    let this_sunday = get_date_format(Some(sunday), "MM-DD");

    format!("{} ~ {} (W{})", this_monday, this_sunday, week_count)
}

/// Year and quarter, e.g. `2023年第4季`.
pub fn get_single_season_display(date: Option<NaiveDate>) -> String {
    if date.is_none() {
        return String::new();
    }
    let year = get_date_format(date, "YYYY");
    let season = get_date_format(date, "Q");
    format!("{}年第{}季", year, season)
}

/// 取得當週的起訖日期(日期): `(Monday, Sunday)`.
pub fn get_week_start_and_end_date(date: Option<NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    date.and_then(week_bounds)
}

/// Renders `date` with a moment-style pattern. Every other label in this
/// module goes through here.
pub fn get_date_format(date: Option<NaiveDate>, pattern: &str) -> String {
    match date {
        Some(date) => format_date(date, pattern),
        None => String::new(),
    }
}

/// Label for the period type named `date_type` (exact variant name).
/// Unknown names give an empty string.
pub fn get_date_type_date_str(date_type: &str, date: Option<NaiveDate>) -> String {
    match date_type.parse::<PeriodType>() {
        Ok(period) => date_type_date_str(period, date),
        Err(_) => {
            debug!(date_type, "unrecognized period type, rendering empty label");
            get_date_format(date, "")
        }
    }
}

pub fn date_type_date_str(period: PeriodType, date: Option<NaiveDate>) -> String {
    get_date_format(date, period.format_pattern())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_absent_date_gives_empty_results() {
        assert!(get_week_map(None).is_empty());
        assert_eq!(get_week_start_and_end_display(None), "");
        assert_eq!(get_single_season_display(None), "");
        assert_eq!(get_week_start_and_end_date(None), None);
        assert_eq!(get_date_format(None, "YYYY-MM-DD"), "");
        for period in PeriodType::ALL {
            assert_eq!(get_date_type_date_str(period.name(), None), "");
        }
    }

    #[test]
    fn test_wednesday_example() {
        let date = Some(ymd(2023, 11, 29));
        assert_eq!(get_week_start_and_end_display(date), "2023-11-27 ~ 12-03 (W48)");
        assert_eq!(get_week_start_and_end_date(date), Some((ymd(2023, 11, 27), ymd(2023, 12, 3))));
        assert_eq!(get_single_season_display(date), "2023年第4季");
        assert_eq!(get_date_type_date_str("Daily", date), "2023-11-29");
        assert_eq!(get_date_type_date_str("Weekly", date), "2023-W48");
        assert_eq!(get_date_type_date_str("Monthly", date), "2023-11");
        assert_eq!(get_date_type_date_str("SingleQuarter", date), "2023-Q4");
        assert_eq!(get_date_type_date_str("FullYearQuarters", date), "2023");
        assert_eq!(get_date_type_date_str("EachYear", date), "2023");
    }

    #[test]
    fn test_week_map() {
        let map = get_week_map(Some(ymd(2023, 11, 29)));
        assert_eq!(map.len(), 7);

        let keys: Vec<DayType> = map.keys().copied().collect();
        assert_eq!(keys, DayType::ALL.to_vec());

        let dates: Vec<NaiveDate> = map.values().copied().collect();
        assert_eq!(dates[0], ymd(2023, 11, 27));
        assert_eq!(dates[0].weekday(), Weekday::Mon);
        for pair in dates.windows(2) {
            assert_eq!(pair[1].signed_duration_since(pair[0]).num_days(), 1);
        }
        assert_eq!(map[&DayType::Sunday], ymd(2023, 12, 3));
    }

    #[test]
    fn test_week_map_for_every_weekday() {
        // 2024-02-26 (Mon) .. 2024-03-03 (Sun), across a leap day
        let monday = ymd(2024, 2, 26);
        for offset in 0..7 {
            let date = monday + chrono::Duration::days(offset);
            let map = get_week_map(Some(date));
            assert_eq!(map[&DayType::Monday], monday);
            assert_eq!(map[&DayType::Thursday], ymd(2024, 2, 29));
            assert_eq!(map[&DayType::Sunday], ymd(2024, 3, 3));
        }
    }

    #[test]
    fn test_week_start_and_end_date_is_monday_to_sunday() {
        for date in [ymd(2023, 1, 1), ymd(2023, 6, 15), ymd(2024, 12, 31), ymd(2020, 2, 29)] {
            let (monday, sunday) = get_week_start_and_end_date(Some(date)).unwrap();
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert_eq!(sunday.weekday(), Weekday::Sun);
            assert_eq!(sunday.signed_duration_since(monday).num_days(), 6);
            assert!(monday <= date && date <= sunday);
        }
    }

    #[test]
    fn test_week_display_across_year_boundary() {
        // Sunday in ISO week 52 of 2022
        assert_eq!(get_week_start_and_end_display(Some(ymd(2023, 1, 1))), "2022-12-26 ~ 01-01 (W52)");
        // Monday starting ISO week 1 of 2025
        assert_eq!(get_week_start_and_end_display(Some(ymd(2024, 12, 30))), "2024-12-30 ~ 01-05 (W1)");
    }

    #[test]
    fn test_single_season_boundaries() {
        assert_eq!(get_single_season_display(Some(ymd(2024, 1, 1))), "2024年第1季");
        assert_eq!(get_single_season_display(Some(ymd(2024, 3, 31))), "2024年第1季");
        assert_eq!(get_single_season_display(Some(ymd(2024, 4, 1))), "2024年第2季");
        assert_eq!(get_single_season_display(Some(ymd(2024, 7, 1))), "2024年第3季");
        assert_eq!(get_single_season_display(Some(ymd(2024, 10, 1))), "2024年第4季");
    }

    #[test]
    fn test_full_year_quarters_matches_each_year() {
        for date in [ymd(2023, 11, 29), ymd(1999, 1, 1), ymd(2024, 12, 30)] {
            assert_eq!(
                get_date_type_date_str("FullYearQuarters", Some(date)),
                get_date_type_date_str("EachYear", Some(date))
            );
        }
    }

    #[test]
    fn test_unknown_period_type_is_empty() {
        let date = Some(ymd(2023, 11, 29));
        assert_eq!(get_date_type_date_str("Unknown", date), "");
        assert_eq!(get_date_type_date_str("daily", date), "");
        assert_eq!(get_date_type_date_str("", date), "");
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let date = Some(ymd(2023, 11, 29));
        assert_eq!(get_week_map(date), get_week_map(date));
        assert_eq!(get_week_start_and_end_display(date), get_week_start_and_end_display(date));
        assert_eq!(get_date_type_date_str("Weekly", date), get_date_type_date_str("Weekly", date));
    }

    #[test]
    fn test_out_of_range_week_is_empty() {
        // The week's Sunday lies past the last supported date
        let last = NaiveDate::MAX;
        assert!(get_week_map(Some(last)).is_empty());
        assert_eq!(get_week_start_and_end_date(Some(last)), None);
        assert_eq!(get_week_start_and_end_display(Some(last)), "");
        assert!(!get_single_season_display(Some(last)).is_empty());

        // The week's Monday lies before the first supported date
        let first = NaiveDate::MIN;
        assert!(get_week_map(Some(first)).is_empty());
        assert_eq!(get_week_start_and_end_date(Some(first)), None);
        assert_eq!(get_week_start_and_end_display(Some(first)), "");
    }
}
