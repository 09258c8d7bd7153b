//! Moment-style date patterns (`YYYY-MM-DD`, `YYYY-[W]ww`, ...).
//!
//! Names and ordinals follow the zh-tw locale. Its week rule (Monday start,
//! the week holding Jan 4 is week 1) is the ISO-8601 rule, so locale and ISO
//! week tokens render the same numbers.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月",
    "七月", "八月", "九月", "十月", "十一月", "十二月",
];
const MONTHS_SHORT: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月",
    "7月", "8月", "9月", "10月", "11月", "12月",
];
// Sunday first
const WEEKDAYS: [&str; 7] = ["星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六"];
const WEEKDAYS_SHORT: [&str; 7] = ["週日", "週一", "週二", "週三", "週四", "週五", "週六"];
const WEEKDAYS_MIN: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

// Hour 0 falls in the zh-tw "before 06:00" meridiem band.
const MIDNIGHT_MERIDIEM: &str = "凌晨";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Year,
    YearPadded,
    YearExpanded,
    YearSigned,
    YearShort,
    IsoWeekYear,
    IsoWeekYearShort,
    LocaleWeekYear,
    LocaleWeekYearShort,
    Quarter,
    QuarterOrdinal,
    Month,
    MonthPadded,
    MonthOrdinal,
    MonthShortName,
    MonthName,
    DayOfMonth,
    DayOfMonthPadded,
    DayOfMonthOrdinal,
    DayOfYear,
    DayOfYearPadded,
    DayOfYearOrdinal,
    Weekday,
    WeekdayOrdinal,
    WeekdayMin,
    WeekdayShort,
    WeekdayName,
    LocaleWeekday,
    IsoWeekday,
    LocaleWeek,
    LocaleWeekPadded,
    LocaleWeekOrdinal,
    IsoWeek,
    IsoWeekPadded,
    IsoWeekOrdinal,
    Hour,
    HourPadded,
    Hour12,
    Hour12Padded,
    Minute,
    MinutePadded,
    Second,
    SecondPadded,
    Meridiem,
}

// Longest first so `MMMM` wins over `MM` at the same position.
const TOKENS: &[(&str, Token)] = &[
    ("YYYYYY", Token::YearSigned),
    ("YYYYY", Token::YearExpanded),
    ("YYYY", Token::YearPadded),
    ("GGGG", Token::IsoWeekYear),
    ("gggg", Token::LocaleWeekYear),
    ("MMMM", Token::MonthName),
    ("DDDD", Token::DayOfYearPadded),
    ("DDDo", Token::DayOfYearOrdinal),
    ("dddd", Token::WeekdayName),
    ("MMM", Token::MonthShortName),
    ("DDD", Token::DayOfYear),
    ("ddd", Token::WeekdayShort),
    ("YY", Token::YearShort),
    ("GG", Token::IsoWeekYearShort),
    ("gg", Token::LocaleWeekYearShort),
    ("Qo", Token::QuarterOrdinal),
    ("MM", Token::MonthPadded),
    ("Mo", Token::MonthOrdinal),
    ("DD", Token::DayOfMonthPadded),
    ("Do", Token::DayOfMonthOrdinal),
    ("dd", Token::WeekdayMin),
    ("do", Token::WeekdayOrdinal),
    ("ww", Token::LocaleWeekPadded),
    ("wo", Token::LocaleWeekOrdinal),
    ("WW", Token::IsoWeekPadded),
    ("Wo", Token::IsoWeekOrdinal),
    ("HH", Token::HourPadded),
    ("hh", Token::Hour12Padded),
    ("mm", Token::MinutePadded),
    ("ss", Token::SecondPadded),
    ("Y", Token::Year),
    ("Q", Token::Quarter),
    ("M", Token::Month),
    ("D", Token::DayOfMonth),
    ("d", Token::Weekday),
    ("e", Token::LocaleWeekday),
    ("E", Token::IsoWeekday),
    ("w", Token::LocaleWeek),
    ("W", Token::IsoWeek),
    ("H", Token::Hour),
    ("h", Token::Hour12),
    ("m", Token::Minute),
    ("s", Token::Second),
    ("A", Token::Meridiem),
    ("a", Token::Meridiem),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternItem {
    Literal(String),
    Token(Token),
}

/// A tokenized pattern. Parsing never fails: anything that is not a token is
/// copied to the output as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatePattern {
    items: Vec<PatternItem>,
}

impl DatePattern {
    pub fn parse(pattern: &str) -> Self {
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;

        while let Some(c) = rest.chars().next() {
            // [escaped text], which may not contain another '['
            if c == '[' {
                if let Some(end) = rest[1..].find(&['[', ']'][..]).map(|i| i + 1) {
                    if rest[end..].starts_with(']') {
                        literal.push_str(&rest[1..end]);
                        rest = &rest[end + 1..];
                        continue;
                    }
                }
            }

            // \x
            if c == '\\' {
                let mut chars = rest[1..].chars();
                if let Some(escaped) = chars.next() {
                    literal.push(escaped);
                    rest = chars.as_str();
                    continue;
                }
            }

            if let Some((text, token)) = TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
                if !literal.is_empty() {
                    items.push(PatternItem::Literal(std::mem::take(&mut literal)));
                }
                items.push(PatternItem::Token(*token));
                rest = &rest[text.len()..];
                continue;
            }

            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }

        if !literal.is_empty() {
            items.push(PatternItem::Literal(literal));
        }

        DatePattern { items }
    }

    pub fn items(&self) -> &[PatternItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                PatternItem::Literal(text) => out.push_str(text),
                PatternItem::Token(token) => out.push_str(&render_token(*token, date)),
            }
        }
        out
    }
}

/// Renders `date` with a moment-style `pattern`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    DatePattern::parse(pattern).render(date)
}

/// Pads the magnitude to `width` digits, then prefixes the sign.
fn zero_fill(number: i32, width: usize, force_sign: bool) -> String {
    let digits = format!("{:0width$}", number.unsigned_abs(), width = width);
    if number < 0 {
        format!("-{}", digits)
    } else if force_sign {
        format!("+{}", digits)
    } else {
        digits
    }
}

fn render_token(token: Token, date: NaiveDate) -> String {
    let year = date.year();
    let iso = date.iso_week();
    let month0 = date.month0() as usize;
    let sunday_index = date.weekday().num_days_from_sunday() as usize;
    let quarter = date.month0() / 3 + 1;

    match token {
        Token::Year if year > 9999 => format!("+{}", year),
        Token::Year | Token::YearPadded => zero_fill(year, 4, false),
        Token::YearExpanded => zero_fill(year, 5, false),
        Token::YearSigned => zero_fill(year, 6, true),
        Token::YearShort => zero_fill(year % 100, 2, false),
        Token::IsoWeekYear | Token::LocaleWeekYear => zero_fill(iso.year(), 4, false),
        Token::IsoWeekYearShort | Token::LocaleWeekYearShort => zero_fill(iso.year() % 100, 2, false),
        // zh-tw has no ordinal suffix for quarters
        Token::Quarter | Token::QuarterOrdinal => quarter.to_string(),
        Token::Month => date.month().to_string(),
        Token::MonthPadded => format!("{:02}", date.month()),
        Token::MonthOrdinal => format!("{}月", date.month()),
        Token::MonthShortName => MONTHS_SHORT[month0].to_string(),
        Token::MonthName => MONTHS[month0].to_string(),
        Token::DayOfMonth => date.day().to_string(),
        Token::DayOfMonthPadded => format!("{:02}", date.day()),
        Token::DayOfMonthOrdinal => format!("{}日", date.day()),
        Token::DayOfYear => date.ordinal().to_string(),
        Token::DayOfYearPadded => format!("{:03}", date.ordinal()),
        Token::DayOfYearOrdinal => format!("{}日", date.ordinal()),
        Token::Weekday => sunday_index.to_string(),
        Token::WeekdayOrdinal => format!("{}日", sunday_index),
        Token::WeekdayMin => WEEKDAYS_MIN[sunday_index].to_string(),
        Token::WeekdayShort => WEEKDAYS_SHORT[sunday_index].to_string(),
        Token::WeekdayName => WEEKDAYS[sunday_index].to_string(),
        Token::LocaleWeekday => date.weekday().num_days_from_monday().to_string(),
        Token::IsoWeekday => date.weekday().number_from_monday().to_string(),
        Token::LocaleWeek | Token::IsoWeek => iso.week().to_string(),
        Token::LocaleWeekPadded | Token::IsoWeekPadded => format!("{:02}", iso.week()),
        Token::LocaleWeekOrdinal | Token::IsoWeekOrdinal => format!("{}週", iso.week()),
        // Dates carry no time of day; they render as midnight.
        Token::Hour | Token::Minute | Token::Second => "0".to_string(),
        Token::HourPadded | Token::MinutePadded | Token::SecondPadded => "00".to_string(),
        Token::Hour12 | Token::Hour12Padded => "12".to_string(),
        Token::Meridiem => MIDNIGHT_MERIDIEM.to_string(),
    }
}
