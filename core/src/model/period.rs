use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// 日期類別: granularity of a reporting period label.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodType {
    Daily = 1,
    Weekly = 2,
    Monthly = 3,
    SingleQuarter = 4,
    FullYearQuarters = 5,
    EachYear = 6,
}

impl Default for PeriodType {
    fn default() -> Self {
        PeriodType::Daily
    }
}

/// Format pattern per period type, in variant order.
///
/// FullYearQuarters and EachYear share the same pattern.
pub static DATE_STRING_FORMAT_MAP: [(PeriodType, &str); 6] = [
    (PeriodType::Daily, "YYYY-MM-DD"),
    (PeriodType::Weekly, "YYYY-[W]ww"),
    (PeriodType::Monthly, "YYYY-MM"),
    (PeriodType::SingleQuarter, "YYYY-[Q]Q"),
    (PeriodType::FullYearQuarters, "YYYY"),
    (PeriodType::EachYear, "YYYY"),
];

impl PeriodType {
    pub const ALL: [PeriodType; 6] = [
        PeriodType::Daily,
        PeriodType::Weekly,
        PeriodType::Monthly,
        PeriodType::SingleQuarter,
        PeriodType::FullYearQuarters,
        PeriodType::EachYear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PeriodType::Daily => "Daily",
            PeriodType::Weekly => "Weekly",
            PeriodType::Monthly => "Monthly",
            PeriodType::SingleQuarter => "SingleQuarter",
            PeriodType::FullYearQuarters => "FullYearQuarters",
            PeriodType::EachYear => "EachYear",
        }
    }

    /// Table entry this period type reads its pattern from.
    /// FullYearQuarters goes through the EachYear entry.
    pub fn lookup_key(&self) -> PeriodType {
        match self {
            PeriodType::FullYearQuarters => PeriodType::EachYear,
            other => *other,
        }
    }

    pub fn format_pattern(&self) -> &'static str {
        let key = self.lookup_key();
        DATE_STRING_FORMAT_MAP
            .iter()
            .find(|(period, _)| *period == key)
            .map(|(_, pattern)| *pattern)
            .unwrap_or("")
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PeriodType {
    type Err = Error;

    // Exact variant names only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeriodType::ALL
            .iter()
            .find(|p| p.name() == s)
            .copied()
            .ok_or_else(|| anyhow!("Unknown period type: '{}'", s))
    }
}
