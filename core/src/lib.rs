pub mod calendar;
pub mod model;
pub mod pattern;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use calendar::{
    date_type_date_str, get_date_format, get_date_type_date_str, get_single_season_display,
    get_week_map, get_week_start_and_end_date, get_week_start_and_end_display,
};
pub use model::config::{Config, OutputFormat};
pub use model::day::DayType;
pub use model::period::{PeriodType, DATE_STRING_FORMAT_MAP};
pub use pattern::{format_date, DatePattern};
pub use repository::{ConfigRepository, FileConfigRepository};
pub use service::dto::{DaySummary, PeriodLabel, PeriodSummary};
pub use time::{parse_human_date, parse_human_date_from};
pub use usecase::summary::summarize;
