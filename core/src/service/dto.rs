use serde::{Serialize, Deserialize};
use chrono::NaiveDate;

use crate::model::day::DayType;
use crate::model::period::PeriodType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub day: DayType,
    pub date: NaiveDate,
    pub label: String, // MM-DD (週一)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeriodLabel {
    pub period: PeriodType,
    pub pattern: String,
    pub label: String,
}

/// Every label the formatter produces for one date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub date: String, // YYYY-MM-DD
    pub week_display: String,
    pub season_display: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub days: Vec<DaySummary>,
    pub labels: Vec<PeriodLabel>,
}
