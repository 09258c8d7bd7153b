use std::collections::BTreeMap;

use chrono::NaiveDate;
use periodism_core::{get_date_format, DayType, PeriodSummary, DATE_STRING_FORMAT_MAP};
use tabled::{Table, Tabled};
use tabled::settings::{Style, Color, Modify};
use tabled::settings::object::Rows;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "")]
    marker: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "週")]
    weekday: String,
}

#[derive(Tabled)]
struct PatternRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Pattern")]
    pattern: String,
}

#[derive(Tabled)]
struct PeriodRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "Label")]
    label: String,
}

fn styled(table: &mut Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN)); // Header color
    table.to_string()
}

/// Monday to Sunday, with the selected date marked.
pub fn week_table(week: &BTreeMap<DayType, NaiveDate>, selected: NaiveDate) -> String {
    let rows: Vec<DayRow> = week
        .iter()
        .map(|(day, date)| DayRow {
            marker: if *date == selected { "*".to_string() } else { String::new() },
            day: format!("{:?}", day),
            date: get_date_format(Some(*date), "YYYY-MM-DD"),
            weekday: get_date_format(Some(*date), "ddd"),
        })
        .collect();

    styled(&mut Table::new(rows))
}

pub fn patterns_table() -> String {
    let rows: Vec<PatternRow> = DATE_STRING_FORMAT_MAP
        .iter()
        .map(|(period, pattern)| PatternRow {
            period: period.to_string(),
            pattern: pattern.to_string(),
        })
        .collect();

    styled(&mut Table::new(rows))
}

pub fn summary_table(summary: &PeriodSummary) -> String {
    let rows: Vec<PeriodRow> = summary
        .labels
        .iter()
        .map(|l| PeriodRow {
            period: l.period.to_string(),
            pattern: l.pattern.clone(),
            label: l.label.clone(),
        })
        .collect();

    styled(&mut Table::new(rows))
}
